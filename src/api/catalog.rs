//! External public catalog (SWAPI). Plain GETs with no credentials.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::transport::{join_url, Http};
use super::entities::EntityRecord;
use super::error::ApiError;
use crate::registry::EntityType;
use crate::utils::formatting::{format_cell, record_title};

/// Title used when a record has neither `name` nor `title`.
pub const FALLBACK_TITLE: &str = "Elemento de SWAPI";

static SELF_URL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)/?$").expect("static pattern"));

/// Numeric id from a self-referential URL such as
/// `https://swapi.dev/api/people/4/`. Anything else is `None`.
pub fn extract_id(url: &str) -> Option<u32> {
    SELF_URL_ID
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().parse().ok())
}

/// One card of the catalog grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// `None` when the record's `url` does not end in a numeric segment.
    pub id: Option<u32>,
    pub title: String,
    pub url: Option<String>,
    pub record: EntityRecord,
}

impl CatalogItem {
    pub fn from_record(record: EntityRecord) -> Self {
        let url = record.get("url").and_then(Value::as_str).map(str::to_string);
        let id = url.as_deref().and_then(extract_id);
        if id.is_none() {
            log::warn!("Catalog record without a parseable id: {:?}", url);
        }
        Self {
            id,
            title: record_title(&record).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            url,
            record,
        }
    }

    /// Cards whose id could not be derived cannot become a sync draft.
    pub fn is_selectable(&self) -> bool {
        self.id.is_some()
    }

    /// Up to `limit` label/value pairs from the entity's list columns,
    /// skipping the title columns already shown as the card heading.
    pub fn summary(&self, entity: EntityType, limit: usize) -> Vec<(&'static str, String)> {
        entity
            .list_fields()
            .iter()
            .filter(|field| !matches!(**field, "name" | "title"))
            .take(limit)
            .map(|field| (*field, format_cell(&self.record, field)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogListing {
    #[serde(default)]
    results: Vec<EntityRecord>,
}

#[derive(Clone)]
pub struct CatalogApi {
    http: Http,
    base_url: String,
}

impl CatalogApi {
    pub fn new(http: Http, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn list_url(&self, entity: EntityType) -> String {
        join_url(&self.base_url, &format!("{}/?page=1", entity.slug()))
    }

    pub fn record_url(&self, entity: EntityType, id: &str) -> String {
        join_url(&self.base_url, &format!("{}/{}/", entity.slug(), id.trim()))
    }

    /// First page of the catalog for `entity`.
    pub async fn list(&self, entity: EntityType) -> Result<Vec<CatalogItem>, ApiError> {
        let listing: CatalogListing = self.http.get_json(&self.list_url(entity)).await?;
        Ok(listing.results.into_iter().map(CatalogItem::from_record).collect())
    }

    pub async fn fetch(&self, entity: EntityType, id: &str) -> Result<EntityRecord, ApiError> {
        self.http.get_json(&self.record_url(entity, id)).await
    }
}
