//! HTTP API Layer
//!
//! This crate provides the REST API for the referral commission tracker
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for wiremen, bills, points, and stats
//! - **DTOs**: request/response data transfer objects with field-level
//!   validation
//! - **Error Handling**: consistent `{error, message}` responses
//!
//! All bill and points mutations go through the `LedgerEngine`, so the
//! HTTP layer never touches the bills or points tables directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::repositories::{StatsRepository, WiremanRepository};
use infra_db::LedgerEngine;

use crate::handlers::{bill, health, points, stats, wireman};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub engine: LedgerEngine,
    pub wiremen: WiremanRepository,
    pub stats: StatsRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let engine = LedgerEngine::new(pool.clone());
        let wiremen = WiremanRepository::new(pool.clone());
        let stats = StatsRepository::new(pool.clone());
        Self {
            pool,
            engine,
            wiremen,
            stats,
        }
    }
}

/// Creates the main API router
pub fn create_router(pool: PgPool) -> Router {
    let state = AppState::new(pool);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let wireman_routes = Router::new()
        .route("/", post(wireman::register_wireman))
        .route("/", get(wireman::list_wiremen))
        .route("/:id", get(wireman::get_wireman))
        .route("/:id", put(wireman::update_wireman))
        .route("/:id", delete(wireman::delete_wireman))
        .route("/:id/bills", get(bill::list_wireman_bills))
        .route("/:id/dashboard", get(stats::wireman_dashboard))
        .route("/:id/points", get(points::get_points))
        .route("/:id/points/redeem", post(points::redeem_points))
        .route("/:id/points/redeem-all", post(points::redeem_all_points))
        .route("/:id/points/reset", post(points::reset_points));

    let bill_routes = Router::new()
        .route("/", post(bill::submit_bill))
        .route("/", get(bill::list_bills))
        .route("/:id", put(bill::update_bill))
        .route("/:id", delete(bill::delete_bill));

    let stats_routes = Router::new()
        .route("/summary", get(stats::summary))
        .route("/leaderboard", get(stats::leaderboard))
        .route("/wiremen-filter", get(stats::filter_wiremen));

    let api_routes = Router::new()
        .nest("/wiremen", wireman_routes)
        .nest("/bills", bill_routes)
        .merge(stats_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
