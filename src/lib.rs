//! Inventário Office Inventory Management System
//!
//! A Rust REST API server for tracking office machines, SIM chips,
//! phone-system lines, locations and users, with an in-memory listing module
//! mirroring the dashboard's search and pagination behavior.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
