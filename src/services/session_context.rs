//! Reactive session service shared through context.

use leptos::prelude::*;

use super::session::{Session, SessionStore, User};

/// Session store plus a signal mirroring it. Views and the route guard read
/// the signal; writes go through here so both stay in step.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let current = RwSignal::new(store.load());
        Self { store, current }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Reactive: re-runs the caller when the session changes.
    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    pub fn user(&self) -> Option<User> {
        self.current.with(|session| session.as_ref().and_then(|s| s.user.clone()))
    }

    pub fn set(&self, session: Session) {
        self.store.save(&session);
        self.current.set(Some(session));
    }

    pub fn clear(&self) {
        self.store.clear();
        self.current.set(None);
    }

    pub fn logout(&self) {
        log::info!("Signing out");
        self.clear();
    }

    /// Re-read storage, e.g. after the HTTP layer cleared it behind our back.
    pub fn refresh(&self) {
        self.current.set(self.store.load());
    }
}

pub fn provide_session_context(store: SessionStore) -> SessionContext {
    let context = SessionContext::new(store);
    provide_context(context.clone());
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
