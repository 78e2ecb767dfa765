//! Libris Library Catalog Presentation Server
//!
//! A small Rust service that reads author and book-instance records from a
//! catalog store, formats them for display, and serves them over a REST
//! JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod source;

pub use config::AppConfig;
pub use error::{StoreError, StoreResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
