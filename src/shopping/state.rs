//! Shopping List State Management
//!
//! This module manages the application state for the shopping list,
//! including the item store handle and UI page lookup.

use super::models::PAGE_FILE_NAME;
use super::store::ItemStore;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// UI page compiled into the binary, served when no asset override exists
pub const DEFAULT_PAGE_HTML: &str = include_str!("../../assets/shopping-list.html");

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the item store and asset information
#[derive(Debug)]
pub struct AppState {
    /// Handle to the persisted item list.
    pub store: ItemStore,

    /// Path to the directory that may contain an override of the UI page.
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState backed by `data_file` and locates the assets directory
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);
        Self::with_assets_dir(data_file, assets_dir)
    }

    /// Creates a new AppState with an explicit assets directory
    pub fn with_assets_dir(data_file: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        let store = ItemStore::new(data_file);
        let assets_dir = assets_dir.into();

        tracing::info!(
            data_file = %store.path().display(),
            assets_dir = %assets_dir.display(),
            "shopping list state ready"
        );

        Self { store, assets_dir }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    /// Reads the UI page from the assets directory, or the built-in copy
    pub async fn load_page_html(&self) -> String {
        let page_path = self.assets_dir.join(PAGE_FILE_NAME);
        match tokio::fs::read_to_string(&page_path).await {
            Ok(html) => html,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %page_path.display(),
                        error = %e,
                        "unreadable page override"
                    );
                }
                DEFAULT_PAGE_HTML.to_string()
            }
        }
    }
}
