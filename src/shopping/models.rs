//! Shopping List Domain Models
//!
//! This module contains all data structures related to the shopping list
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// File name of the persisted item list when no path is configured
pub const DATA_FILE_NAME: &str = "shopping_data.json";
/// File name of the UI page looked up in the assets directory
pub const PAGE_FILE_NAME: &str = "shopping-list.html";

// =============================================================================
// Shopping List Domain Models
// =============================================================================

/// A single entry on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identifier, unique within the list
    pub id: u64,

    /// Trimmed, non-empty display name
    pub name: String,

    /// Whether the item has been checked off
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    /// Creates a fresh, unchecked item
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
        }
    }
}

/// Body of `POST /api/items`
#[derive(Debug, Deserialize)]
pub struct NewItemInput {
    /// Requested name; a missing field is treated like an empty one
    #[serde(default)]
    pub name: String,
}

/// JSON body returned with every 4xx/5xx response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human readable description of the failure
    pub error: String,
}
