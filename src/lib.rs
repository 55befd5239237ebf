//! Shopping List Library
//!
//! This library provides a file-backed shopping list web service and a
//! small controller for the system output volume.

// Domain modules
pub mod shopping;
pub mod volume;

// Infrastructure
pub mod config;
pub mod router;

/// Installs the global `tracing` subscriber used by the binaries.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
