//! Catalog (category/location) models.
//!
//! Categories and locations have identical shape and invariants, so one set
//! of types serves both, keyed by [`CatalogKind`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Which reference list a catalog operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Category,
    Location,
}

impl CatalogKind {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            CatalogKind::Category => "categories",
            CatalogKind::Location => "locations",
        }
    }

    /// Column on `assets` that references this list by value.
    pub fn asset_column(&self) -> &'static str {
        match self {
            CatalogKind::Category => "category",
            CatalogKind::Location => "location",
        }
    }

    /// Entity name used in error messages.
    pub fn entity(&self) -> &'static str {
        match self {
            CatalogKind::Category => "Category",
            CatalogKind::Location => "Location",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    /// Parses the plural path segment used by the HTTP layer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" => Ok(CatalogKind::Category),
            "locations" => Ok(CatalogKind::Location),
            other => Err(format!("unknown catalog kind: {other}")),
        }
    }
}

/// A row from either catalog table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogEntry {
    pub name: String,
}

/// DTO for adding a catalog entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCatalogEntry {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// DTO for renaming a catalog entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameCatalogEntry {
    #[validate(length(min = 1, message = "new_name is required"))]
    pub new_name: String,
}
