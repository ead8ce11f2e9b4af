//! Summary, dashboard, leaderboard, and filter handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use infra_db::repositories::stats::{
    LeaderboardCategory, RankedWireman, Summary, WiremanDashboard, WiremanFilterKey,
};

use crate::{error::ApiError, AppState};

/// System-wide summary metrics
pub async fn summary(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let summary = state.stats.summary().await?;
    Ok(Json(summary))
}

/// Dashboard metrics for one wireman
pub async fn wireman_dashboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WiremanDashboard>, ApiError> {
    state.wiremen.get(id.into()).await?;

    let dashboard = state.stats.wireman_dashboard(id.into()).await?;
    Ok(Json(dashboard))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub category: LeaderboardCategory,
}

/// Wiremen ranked by the requested category
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<RankedWireman>>, ApiError> {
    let ranking = state.stats.leaderboard(query.category).await?;
    Ok(Json(ranking))
}

fn default_filter_max() -> Decimal {
    Decimal::from(10_000)
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub by: WiremanFilterKey,
    #[serde(default)]
    pub min: Decimal,
    #[serde(default = "default_filter_max")]
    pub max: Decimal,
}

/// Wiremen whose balance points or total bill amount falls in a range
pub async fn filter_wiremen(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<RankedWireman>>, ApiError> {
    let wiremen = state
        .stats
        .filter_wiremen(query.by, query.min, query.max)
        .await?;
    Ok(Json(wiremen))
}
