//! Loaders for the list and detail views. They resolve the route slug, call
//! the backend and shape the result into display rows.

use thiserror::Error;

use crate::api::{ApiClient, EntityRecord, Pagination};
use crate::registry::EntityType;
use crate::utils::formatting::{column_header, format_cell, format_value, humanize_key, record_id, record_title};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("Tipo de entidad no válido")]
    InvalidEntity,
    #[error("Error al cargar los datos: {0}")]
    List(String),
    #[error("Error al cargar el detalle: {0}")]
    Detail(String),
}

pub fn resolve_entity(slug: &str) -> Result<EntityType, ViewError> {
    EntityType::from_slug(slug).ok_or(ViewError::InvalidEntity)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub cells: Vec<String>,
    /// `None` when the record carries no usable id.
    pub detail_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub entity: EntityType,
    pub headers: Vec<String>,
    pub rows: Vec<ListRow>,
    pub pagination: Pagination,
}

impl ListPage {
    pub fn total_label(&self) -> String {
        format!("Total: {} elementos", self.pagination.total)
    }

    pub fn page_label(&self) -> String {
        format!("Página {} de {}", self.pagination.current_page, self.pagination.last_page)
    }
}

pub fn list_row(entity: EntityType, record: &EntityRecord) -> ListRow {
    ListRow {
        cells: entity
            .list_fields()
            .iter()
            .map(|field| format_cell(record, field))
            .collect(),
        detail_path: record_id(record).map(|id| entity.detail_path(&id)),
    }
}

pub fn list_headers(entity: EntityType) -> Vec<String> {
    entity.list_fields().iter().map(|field| column_header(field)).collect()
}

pub async fn load_page(client: &ApiClient, slug: &str, page: u32) -> Result<ListPage, ViewError> {
    let entity = resolve_entity(slug)?;
    let envelope = client
        .fetch_page(entity, page)
        .await
        .map_err(|e| ViewError::List(e.detail()))?;

    Ok(ListPage {
        entity,
        headers: list_headers(entity),
        rows: envelope.data.iter().map(|record| list_row(entity, record)).collect(),
        pagination: Pagination::from_page(&envelope),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub entity: EntityType,
    pub heading: String,
    pub rows: Vec<DetailRow>,
}

impl DetailView {
    pub fn from_record(entity: EntityType, record: &EntityRecord) -> Self {
        let rows = record
            .iter()
            .filter(|(key, _)| !entity.is_detail_excluded(key))
            .map(|(key, value)| DetailRow {
                label: humanize_key(key),
                value: format_value(key, value),
            })
            .collect();
        Self {
            entity,
            heading: record_title(record).unwrap_or_default(),
            rows,
        }
    }

    pub fn back_label(&self) -> String {
        format!("← Volver a {}s", self.entity.singular())
    }

    pub fn section_title(&self) -> String {
        format!("Información de {}", self.entity.singular())
    }
}

pub async fn load_detail(client: &ApiClient, slug: &str, id: &str) -> Result<DetailView, ViewError> {
    let entity = resolve_entity(slug)?;
    let record = client
        .fetch_record(entity, id)
        .await
        .map_err(|e| ViewError::Detail(e.detail()))?;
    Ok(DetailView::from_record(entity, &record))
}
