use serde::Deserialize;
use serde_json::{Map, Value};

use super::client::ApiClient;
use super::error::ApiError;
use crate::registry::EntityType;

/// A loosely typed backend record, field order preserved.
pub type EntityRecord = Map<String, Value>;

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Paginated list envelope returned by `GET /api/v1/{type}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityPage {
    #[serde(default)]
    pub data: Vec<EntityRecord>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Pagination as last reported by the server. Nothing here is computed
/// client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
            per_page: 10,
        }
    }
}

impl Pagination {
    pub fn from_page(page: &EntityPage) -> Self {
        Self {
            current_page: page.current_page,
            last_page: page.last_page,
            total: page.total,
            per_page: page.per_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// `Some(page)` when `page` lies in `[1, last_page]`.
    pub fn accept(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.last_page).then_some(page)
    }

    pub fn previous(&self) -> Option<u32> {
        self.accept(self.current_page.saturating_sub(1))
    }

    pub fn next(&self) -> Option<u32> {
        self.accept(self.current_page.saturating_add(1))
    }
}

pub fn list_endpoint(entity: EntityType, page: u32) -> String {
    format!("/api/v1/{}?page={}", entity.slug(), page)
}

pub fn record_endpoint(entity: EntityType, id: &str) -> String {
    format!("/api/v1/{}/{}", entity.slug(), id.trim())
}

impl ApiClient {
    pub async fn fetch_page(&self, entity: EntityType, page: u32) -> Result<EntityPage, ApiError> {
        self.get(&list_endpoint(entity, page)).await
    }

    pub async fn fetch_record(&self, entity: EntityType, id: &str) -> Result<EntityRecord, ApiError> {
        self.get(&record_endpoint(entity, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_envelope_deserialization() {
        let page: EntityPage = serde_json::from_value(json!({
            "data": [{"id": 1, "name": "Luke"}, {"id": 2, "name": "C-3PO"}],
            "current_page": 2,
            "last_page": 9,
            "total": 82,
            "per_page": 10
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        let pagination = Pagination::from_page(&page);
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.last_page, 9);
        assert_eq!(pagination.total, 82);
    }

    #[test]
    fn test_page_envelope_defaults() {
        let page: EntityPage = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(Pagination::from_page(&page), Pagination::default());
    }

    #[test]
    fn test_record_field_order_is_preserved() {
        let record: EntityRecord =
            serde_json::from_str(r#"{"name":"Luke","height":"172","films":[]}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "height", "films"]);
    }

    #[test]
    fn test_navigation_bounds() {
        let first = Pagination { current_page: 1, last_page: 3, ..Pagination::default() };
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination { current_page: 3, last_page: 3, ..Pagination::default() };
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), None);

        let only = Pagination::default();
        assert!(!only.has_previous());
        assert!(!only.has_next());
    }

    #[test]
    fn test_accept_clamps_to_range() {
        let pagination = Pagination { current_page: 2, last_page: 5, ..Pagination::default() };
        assert_eq!(pagination.accept(0), None);
        assert_eq!(pagination.accept(1), Some(1));
        assert_eq!(pagination.accept(5), Some(5));
        assert_eq!(pagination.accept(6), None);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(list_endpoint(EntityType::People, 1), "/api/v1/people?page=1");
        assert_eq!(record_endpoint(EntityType::Films, " 3 "), "/api/v1/films/3");
    }
}
