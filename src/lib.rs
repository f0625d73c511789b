//! camcade-scores library - leaderboard service for the Camcade webcam mini-games
//!
//! Exposes the router-building seam so integration tests can drive the
//! full HTTP surface without binding a socket.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod pagination;

use config::Config;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Immutable service configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Build application router
///
/// CORS is permissive: the game clients are static pages served from
/// arbitrary origins.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/leaderboards", get(api::get_all_leaderboards))
        .route(
            "/leaderboards/:game",
            get(api::get_leaderboard).post(api::submit_score),
        )
        .route("/admin/reset/:game", post(api::reset))
        .route("/health", get(api::health_check))
        .route("/build_info", get(api::build_info))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
