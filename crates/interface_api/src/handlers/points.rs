//! Points handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::points::*;
use crate::dto::MessageResponse;
use crate::{error::ApiError, AppState};

/// Gets the points record of a wireman
///
/// A wireman who has never had a bill submitted has no record yet; that
/// Absent state surfaces as 404.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PointsResponse>, ApiError> {
    let ledger = state
        .engine
        .ledger(id.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("No points record found for this wireman.".to_string()))?;

    Ok(Json(ledger.into()))
}

/// Redeems a specific number of points
pub async fn redeem_points(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RedeemPointsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    state.engine.redeem_specific(id.into(), request.points).await?;
    Ok(Json(MessageResponse::new(format!(
        "Redeemed {} points successfully.",
        request.points
    ))))
}

/// Redeems the wireman's entire balance
pub async fn redeem_all_points(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.engine.redeem_all(id.into()).await?;
    Ok(Json(MessageResponse::new("All points redeemed successfully.")))
}

/// Resets the wireman's points record to zero
pub async fn reset_points(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.engine.reset_points(id.into()).await?;
    Ok(Json(MessageResponse::new("All points have been reset.")))
}
