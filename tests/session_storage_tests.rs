//! Session Storage Tests
//!
//! Session persistence against the real `localStorage` and the reactive
//! session context on top of it.

#![cfg(target_arch = "wasm32")]

use swapi_client::services::session::{
    BrowserStorage, Session, SessionStore, StorageBackend, User, ACCESS_TOKEN_KEY, USER_KEY,
};
use swapi_client::services::session_context::SessionContext;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_store() -> SessionStore {
    let store = SessionStore::browser();
    store.clear();
    store
}

fn han() -> Session {
    Session {
        token: "falcon".to_string(),
        user: Some(User {
            name: Some("Han".to_string()),
            role: Some("smuggler".to_string()),
            ..User::default()
        }),
    }
}

// ============================================================================
// localStorage
// ============================================================================

#[wasm_bindgen_test]
fn test_session_round_trips_through_local_storage() {
    let store = fresh_store();
    store.save(&han());

    assert_eq!(BrowserStorage.read(ACCESS_TOKEN_KEY).as_deref(), Some("falcon"));
    let raw_user = BrowserStorage.read(USER_KEY).unwrap();
    assert!(raw_user.contains("\"name\":\"Han\""));

    assert_eq!(SessionStore::browser().load(), Some(han()));
    store.clear();
}

#[wasm_bindgen_test]
fn test_clear_removes_both_keys() {
    let store = fresh_store();
    store.save(&han());
    store.clear();

    assert_eq!(BrowserStorage.read(ACCESS_TOKEN_KEY), None);
    assert_eq!(BrowserStorage.read(USER_KEY), None);
}

#[wasm_bindgen_test]
fn test_literal_undefined_is_not_a_session() {
    let store = fresh_store();
    BrowserStorage.write(ACCESS_TOKEN_KEY, "undefined");
    assert!(store.load().is_none());
    store.clear();
}

// ============================================================================
// SessionContext
// ============================================================================

#[wasm_bindgen_test]
fn test_context_tracks_set_and_clear() {
    let context = SessionContext::new(fresh_store());
    assert!(!context.is_authenticated());

    context.set(han());
    assert!(context.is_authenticated());
    assert_eq!(context.user().and_then(|u| u.name).as_deref(), Some("Han"));

    context.logout();
    assert!(!context.is_authenticated());
    assert!(SessionStore::browser().load().is_none());
}

#[wasm_bindgen_test]
fn test_refresh_picks_up_external_clear() {
    let context = SessionContext::new(fresh_store());
    context.set(han());

    context.store().clear();
    assert!(context.is_authenticated());

    context.refresh();
    assert!(!context.is_authenticated());
}
