//! Shopping List Domain Module
//!
//! This module contains all shopping list business logic, including:
//! - Domain models (Item, request input, error body)
//! - Business logic helpers (id assignment, toggling, formatting)
//! - File-backed item store
//! - Application state management
//! - REST API handlers and the UI page

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::ItemStore;
