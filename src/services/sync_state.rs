//! Sync view state machines
//!
//! Three independent flows share one state value: browsing the external
//! catalog, searching it by id, and committing the chosen record to the local
//! backend. The struct is plain data; the view owns it in a signal and drives
//! the network calls.

use serde_json::Value;

use crate::api::catalog::FALLBACK_TITLE;
use crate::api::{ApiError, CatalogItem, EntityRecord, ErrorKind, SyncRequest};
use crate::registry::EntityType;
use crate::utils::formatting::record_title;

pub const SEARCH_ID_REQUIRED: &str = "Por favor ingresa un ID válido";
pub const SEARCH_FAILED: &str = "Error al buscar en la API externa. Verifica tu conexión.";
pub const SYNC_FAILED: &str = "Error al sincronizar en la base de datos local";
pub const SYNC_SUCCEEDED: &str = "Sincronizado exitosamente";
pub const CATALOG_FAILED: &str = "No se pudo cargar el catálogo de SWAPI.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading(EntityType),
    Loaded(Vec<CatalogItem>),
    Failed(String),
}

impl CatalogState {
    pub fn items(&self) -> &[CatalogItem] {
        match self {
            CatalogState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The record about to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncDraft {
    pub entity: EntityType,
    pub external_id: String,
    pub record: EntityRecord,
}

impl SyncDraft {
    pub fn title(&self) -> String {
        record_title(&self.record).unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.record).unwrap_or_default()
    }

    pub fn to_request(&self) -> SyncRequest {
        SyncRequest {
            entity: self.entity.slug().to_string(),
            id: self.external_id.clone(),
            data: Value::Object(self.record.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    pub entity: EntityType,
    pub search_id: String,
    pub catalog: CatalogState,
    pub searching: bool,
    pub search_error: Option<String>,
    pub draft: Option<SyncDraft>,
    pub syncing: bool,
    pub sync_error: Option<String>,
    /// Generation of the success notice currently showing.
    success: Option<u64>,
    generation: u64,
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new(EntityType::People)
    }
}

impl SyncState {
    pub fn new(entity: EntityType) -> Self {
        Self {
            entity,
            search_id: String::new(),
            catalog: CatalogState::Idle,
            searching: false,
            search_error: None,
            draft: None,
            syncing: false,
            sync_error: None,
            success: None,
            generation: 0,
        }
    }

    // ------------------------------------------------------------------
    // Catalog listing
    // ------------------------------------------------------------------

    /// Switch entity type and mark its catalog as loading. The caller fetches.
    pub fn select_entity(&mut self, entity: EntityType) {
        self.entity = entity;
        self.catalog = CatalogState::Loading(entity);
    }

    /// Apply a catalog response. Responses for a type that is no longer
    /// loading are dropped; returns whether it was applied.
    pub fn finish_catalog(&mut self, entity: EntityType, result: Result<Vec<CatalogItem>, ApiError>) -> bool {
        if self.catalog != CatalogState::Loading(entity) {
            log::debug!("Dropping stale catalog response for {}", entity);
            return false;
        }
        self.catalog = match result {
            Ok(items) => CatalogState::Loaded(items),
            Err(e) => {
                log::error!("Catalog listing for {} failed: {}", entity, e);
                CatalogState::Failed(CATALOG_FAILED.to_string())
            }
        };
        true
    }

    pub fn dismiss_catalog_error(&mut self) {
        if matches!(self.catalog, CatalogState::Failed(_)) {
            self.catalog = CatalogState::Loaded(Vec::new());
        }
    }

    /// Copy a card into the draft. No network involved; cards without an id
    /// are refused.
    pub fn select_card(&mut self, item: &CatalogItem) -> bool {
        let Some(id) = item.id else {
            return false;
        };
        self.search_id = id.to_string();
        self.search_error = None;
        self.success = None;
        self.draft = Some(SyncDraft {
            entity: self.entity,
            external_id: id.to_string(),
            record: item.record.clone(),
        });
        true
    }

    // ------------------------------------------------------------------
    // Search by id
    // ------------------------------------------------------------------

    /// Validate the id and enter the searching state. Returns what to fetch,
    /// or `None` (with an error set) when the id is blank.
    pub fn begin_search(&mut self) -> Option<(EntityType, String)> {
        let id = self.search_id.trim().to_string();
        if id.is_empty() {
            self.search_error = Some(SEARCH_ID_REQUIRED.to_string());
            return None;
        }
        self.searching = true;
        self.search_error = None;
        self.draft = None;
        self.success = None;
        Some((self.entity, id))
    }

    pub fn finish_search(&mut self, entity: EntityType, id: &str, result: Result<EntityRecord, ApiError>) {
        self.searching = false;
        match result {
            Ok(record) => {
                self.draft = Some(SyncDraft {
                    entity,
                    external_id: id.to_string(),
                    record,
                });
            }
            Err(e) => {
                self.draft = None;
                self.search_error = Some(if e.kind() == ErrorKind::NotFound {
                    format!("No se encontró el {} con ID {}", entity.slug(), id)
                } else {
                    log::error!("Catalog lookup {} #{} failed: {}", entity, id, e);
                    SEARCH_FAILED.to_string()
                });
            }
        }
    }

    pub fn dismiss_search_error(&mut self) {
        self.search_error = None;
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    pub fn is_success_showing(&self) -> bool {
        self.success.is_some()
    }

    pub fn can_sync(&self) -> bool {
        self.draft.is_some() && !self.syncing && self.success.is_none()
    }

    /// Enter the syncing state and hand back the request body.
    pub fn begin_sync(&mut self) -> Option<SyncRequest> {
        if !self.can_sync() {
            return None;
        }
        let request = self.draft.as_ref()?.to_request();
        self.syncing = true;
        self.sync_error = None;
        Some(request)
    }

    /// On success returns the generation the caller must pass to
    /// `expire_success` once the notice window closes.
    pub fn finish_sync(&mut self, result: Result<Value, ApiError>) -> Option<u64> {
        self.syncing = false;
        match result {
            Ok(_) => {
                self.generation += 1;
                self.success = Some(self.generation);
                Some(self.generation)
            }
            Err(e) => {
                log::error!("Sync failed: {}", e);
                self.sync_error = Some(
                    e.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| SYNC_FAILED.to_string()),
                );
                None
            }
        }
    }

    /// Clear the committed draft, but only if the notice for `generation` is
    /// still the one showing.
    pub fn expire_success(&mut self, generation: u64) -> bool {
        if self.success != Some(generation) {
            return false;
        }
        self.success = None;
        self.draft = None;
        self.search_id.clear();
        true
    }

    pub fn dismiss_sync_error(&mut self) {
        self.sync_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::Harness;
    use crate::api::CatalogApi;
    use futures::executor::block_on;
    use serde_json::json;

    fn record(value: Value) -> EntityRecord {
        value.as_object().cloned().unwrap()
    }

    fn vader() -> CatalogItem {
        CatalogItem::from_record(record(json!({
            "name": "Darth Vader",
            "url": "https://swapi.dev/api/people/4/"
        })))
    }

    fn committed_state() -> (SyncState, u64) {
        let mut state = SyncState::default();
        state.select_entity(EntityType::People);
        state.finish_catalog(EntityType::People, Ok(vec![vader()]));
        assert!(state.select_card(&vader()));
        state.begin_sync().unwrap();
        let generation = state.finish_sync(Ok(json!({"message": "ok"}))).unwrap();
        (state, generation)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    #[test]
    fn test_catalog_loading_and_loaded() {
        let mut state = SyncState::default();
        state.select_entity(EntityType::Planets);
        assert!(state.catalog.is_loading());

        assert!(state.finish_catalog(EntityType::Planets, Ok(vec![])));
        assert_eq!(state.catalog, CatalogState::Loaded(vec![]));
    }

    #[test]
    fn test_stale_catalog_response_dropped() {
        let mut state = SyncState::default();
        state.select_entity(EntityType::Films);
        state.select_entity(EntityType::Vehicles);

        assert!(!state.finish_catalog(EntityType::Films, Ok(vec![vader()])));
        assert!(state.catalog.is_loading());
    }

    #[test]
    fn test_catalog_failure_is_dismissable() {
        let mut state = SyncState::default();
        state.select_entity(EntityType::People);
        state.finish_catalog(EntityType::People, Err(ApiError::Network("offline".into())));
        assert_eq!(state.catalog.error(), Some(CATALOG_FAILED));
        assert!(state.catalog.items().is_empty());

        state.dismiss_catalog_error();
        assert_eq!(state.catalog.error(), None);
    }

    #[test]
    fn test_select_card_issues_no_request() {
        let harness = Harness::new();
        harness.transport.reply(
            200,
            r#"{"results":[{"name":"Darth Vader","url":"https://swapi.dev/api/people/4/"}]}"#,
        );
        let catalog = CatalogApi::new(harness.client.http().clone(), "https://swapi.dev/api");

        let mut state = SyncState::default();
        state.select_entity(EntityType::People);
        let items = block_on(catalog.list(EntityType::People));
        state.finish_catalog(EntityType::People, items);
        assert_eq!(harness.transport.calls(), 1);

        let card = state.catalog.items()[0].clone();
        assert!(state.select_card(&card));
        assert_eq!(harness.transport.calls(), 1);

        let draft = state.draft.as_ref().unwrap();
        assert_eq!(draft.external_id, "4");
        assert_eq!(draft.title(), "Darth Vader");
        assert_eq!(state.search_id, "4");
    }

    #[test]
    fn test_card_without_id_is_refused() {
        let mut state = SyncState::default();
        let orphan = CatalogItem::from_record(record(json!({"name": "Nameless"})));
        assert!(!state.select_card(&orphan));
        assert!(state.draft.is_none());
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[test]
    fn test_blank_id_rejected() {
        let mut state = SyncState::default();
        state.search_id = "   ".to_string();
        assert_eq!(state.begin_search(), None);
        assert_eq!(state.search_error.as_deref(), Some(SEARCH_ID_REQUIRED));
        assert!(!state.searching);
    }

    #[test]
    fn test_search_found() {
        let mut state = SyncState::default();
        state.search_id = " 1 ".to_string();
        let (entity, id) = state.begin_search().unwrap();
        assert_eq!((entity, id.as_str()), (EntityType::People, "1"));
        assert!(state.searching);

        state.finish_search(entity, &id, Ok(record(json!({"name": "Luke Skywalker"}))));
        assert!(!state.searching);
        assert_eq!(state.draft.as_ref().unwrap().title(), "Luke Skywalker");
        assert!(state.can_sync());
    }

    #[test]
    fn test_search_not_found_and_other_failures() {
        let mut state = SyncState::default();
        state.finish_search(EntityType::People, "999", Err(ApiError::from_response(404, "")));
        assert_eq!(state.search_error.as_deref(), Some("No se encontró el people con ID 999"));

        state.finish_search(EntityType::People, "1", Err(ApiError::Timeout(10_000)));
        assert_eq!(state.search_error.as_deref(), Some(SEARCH_FAILED));

        state.dismiss_search_error();
        assert_eq!(state.search_error, None);
    }

    #[test]
    fn test_new_search_clears_draft_and_success() {
        let (mut state, _) = committed_state();
        state.search_id = "5".to_string();
        state.begin_search().unwrap();
        assert!(state.draft.is_none());
        assert!(!state.is_success_showing());
    }

    // ========================================================================
    // Commit
    // ========================================================================

    #[test]
    fn test_sync_request_body() {
        let mut state = SyncState::default();
        state.select_card(&vader());
        let request = state.begin_sync().unwrap();
        assert_eq!(request.entity, "people");
        assert_eq!(request.id, "4");
        assert_eq!(request.data["name"], "Darth Vader");
        assert!(state.syncing);
        assert!(!state.can_sync());
        assert_eq!(state.begin_sync(), None);
    }

    #[test]
    fn test_success_disables_until_expiry() {
        let (mut state, generation) = committed_state();
        assert!(state.is_success_showing());
        assert!(!state.can_sync());
        assert!(state.draft.is_some());

        assert!(state.expire_success(generation));
        assert!(state.draft.is_none());
        assert!(state.search_id.is_empty());
        assert!(!state.is_success_showing());
    }

    #[test]
    fn test_stale_timer_leaves_new_draft_alone() {
        let (mut state, generation) = committed_state();
        state.search_id = "1".to_string();
        let (entity, id) = state.begin_search().unwrap();
        state.finish_search(entity, &id, Ok(record(json!({"name": "Luke"}))));

        assert!(!state.expire_success(generation));
        assert_eq!(state.draft.as_ref().unwrap().title(), "Luke");
    }

    #[test]
    fn test_sync_failure_messages() {
        let mut state = SyncState::default();
        state.select_card(&vader());

        state.begin_sync();
        state.finish_sync(Err(ApiError::from_response(422, r#"{"message":"Entidad no soportada"}"#)));
        assert_eq!(state.sync_error.as_deref(), Some("Entidad no soportada"));
        assert!(state.can_sync());

        state.begin_sync();
        assert_eq!(state.sync_error, None);
        state.finish_sync(Err(ApiError::Network("offline".into())));
        assert_eq!(state.sync_error.as_deref(), Some(SYNC_FAILED));

        state.dismiss_sync_error();
        assert_eq!(state.sync_error, None);
    }
}
