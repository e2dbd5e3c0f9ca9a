//! # School Calendar Backend
//!
//! Builds month grids for the school dashboard calendar and binds
//! caller-supplied events (classes, exams, holidays) onto them.
//!
//! ## Architecture
//!
//! ```text
//! Dashboard UI
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (grid builder, event binder, navigation)
//! ```
//!
//! There is no storage layer: events arrive with each request and nothing
//! is persisted between calls.

pub mod config;
pub mod domain;
pub mod io;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{info, warn};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::domain::CalendarService;

pub use domain::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
}

/// Initialize the backend services from configuration
pub fn initialize_backend(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Setting up calendar service (week starts on {})", config.week_start);
    let calendar_service =
        CalendarService::with_labels(config.week_start_convention()?, config.month_names.clone());

    Ok(AppState { calendar_service })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    // CORS setup to allow the dashboard to make requests
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(e) => warn!("Ignoring invalid CORS origin '{}': {}", config.cors_origin, e),
    }

    let api_routes = Router::new()
        .nest("/calendar", io::calendar_apis::router())
        .nest("/logs", io::logging_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
