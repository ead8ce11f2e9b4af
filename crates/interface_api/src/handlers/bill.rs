//! Bill handlers
//!
//! All mutations delegate to the ledger engine so the bill write and the
//! points adjustment share one transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::Money;

use crate::dto::bill::*;
use crate::dto::MessageResponse;
use crate::{error::ApiError, AppState};

/// Submits a new bill and accrues points for the wireman
pub async fn submit_bill(
    State(state): State<AppState>,
    Json(request): Json<SubmitBillRequest>,
) -> Result<(StatusCode, Json<BillResult>), ApiError> {
    request.validate()?;

    let bill = state
        .engine
        .create_bill(
            request.wireman_id.into(),
            &request.client_name,
            Money::new(request.amount),
            request.date,
            request.payment_status,
        )
        .await?;

    let message = format!(
        "Bill submitted successfully! {} points earned.",
        bill.points_earned
    );
    Ok((
        StatusCode::CREATED,
        Json(BillResult {
            bill: bill.into(),
            message,
        }),
    ))
}

/// Lists every bill, most recent date first
pub async fn list_bills(
    State(state): State<AppState>,
) -> Result<Json<Vec<BillResponse>>, ApiError> {
    let bills = state.engine.all_bills().await?;
    Ok(Json(bills.into_iter().map(Into::into).collect()))
}

/// Lists the bills of one wireman, most recent date first
pub async fn list_wireman_bills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<BillResponse>>, ApiError> {
    // 404 for an unknown wireman rather than an empty list
    state.wiremen.get(id.into()).await?;

    let bills = state.engine.bills_for_wireman(id.into()).await?;
    Ok(Json(bills.into_iter().map(Into::into).collect()))
}

/// Updates a bill and recalculates the wireman's points
pub async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBillRequest>,
) -> Result<Json<BillResult>, ApiError> {
    request.validate()?;

    let bill = state
        .engine
        .update_bill(
            id.into(),
            &request.client_name,
            Money::new(request.amount),
            request.date,
            request.payment_status,
        )
        .await?;

    Ok(Json(BillResult {
        bill: bill.into(),
        message: "Bill updated successfully.".to_string(),
    }))
}

/// Deletes a bill, reclaiming its points
pub async fn delete_bill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.engine.delete_bill(id.into()).await?;
    Ok(Json(MessageResponse::new("Bill deleted successfully.")))
}
