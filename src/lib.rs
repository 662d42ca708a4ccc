//! Agenda Server
//!
//! REST JSON API for a small-business appointment book: clients, staff,
//! a service catalog, business settings and a booking engine that rules
//! on work hours, closed days and slot conflicts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
