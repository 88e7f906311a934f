//! Entity Registry
//!
//! Single declarative table of the catalog categories: route slug, labels,
//! icon, list columns and detail exclusions. Every view reads from here.

use std::fmt;

/// Fields never shown on a detail page.
pub const DETAIL_EXCLUDED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// One of the fixed catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Films,
    People,
    Planets,
    Species,
    Starships,
    Vehicles,
}

impl EntityType {
    /// Every entity type, in navigation order.
    pub const ALL: [EntityType; 6] = [
        EntityType::Films,
        EntityType::People,
        EntityType::Planets,
        EntityType::Species,
        EntityType::Starships,
        EntityType::Vehicles,
    ];

    /// Order used by the sync view's entity selector.
    pub const SYNC_ORDER: [EntityType; 6] = [
        EntityType::People,
        EntityType::Films,
        EntityType::Planets,
        EntityType::Species,
        EntityType::Starships,
        EntityType::Vehicles,
    ];

    /// Resolve a route segment. Unknown slugs are `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entity| entity.slug() == slug)
    }

    /// URL segment used by the router, the backend and the external catalog.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Films => "films",
            Self::People => "people",
            Self::Planets => "planets",
            Self::Species => "species",
            Self::Starships => "starships",
            Self::Vehicles => "vehicles",
        }
    }

    /// Plural display title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Films => "Películas",
            Self::People => "Personas",
            Self::Planets => "Planetas",
            Self::Species => "Especies",
            Self::Starships => "Naves",
            Self::Vehicles => "Vehículos",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Films => "Película",
            Self::People => "Persona",
            Self::Planets => "Planeta",
            Self::Species => "Especie",
            Self::Starships => "Nave",
            Self::Vehicles => "Vehículo",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Films => "🎬",
            Self::People => "👥",
            Self::Planets => "🪐",
            Self::Species => "🧬",
            Self::Starships => "🚀",
            Self::Vehicles => "🚗",
        }
    }

    /// Ordered columns of the list table.
    pub fn list_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Films => &["title", "director", "release_date"],
            Self::People => &["name", "height", "mass", "gender"],
            Self::Planets => &["name", "diameter", "climate", "terrain"],
            Self::Species => &["name", "classification", "language"],
            Self::Starships => &["name", "model", "manufacturer"],
            Self::Vehicles => &["name", "model", "manufacturer"],
        }
    }

    pub fn detail_exclusions(&self) -> &'static [&'static str] {
        DETAIL_EXCLUDED_FIELDS
    }

    pub fn is_detail_excluded(&self, field: &str) -> bool {
        self.detail_exclusions().contains(&field)
    }

    pub fn list_path(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn detail_path(&self, id: &str) -> String {
        format!("/{}/{}", self.slug(), id)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
