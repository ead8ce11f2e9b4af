//! Wireman handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use domain_referral::{validate_wireman_input, Wireman};

use crate::dto::wireman::*;
use crate::dto::MessageResponse;
use crate::{error::ApiError, AppState};

/// Registers a new wireman, dated today
pub async fn register_wireman(
    State(state): State<AppState>,
    Json(request): Json<RegisterWiremanRequest>,
) -> Result<(StatusCode, Json<WiremanResponse>), ApiError> {
    request.validate()?;
    validate_wireman_input(&request.name)?;

    let wireman = Wireman::new(
        request.name,
        request.contact_info,
        Utc::now().date_naive(),
    );
    state.wiremen.insert(&wireman).await?;

    Ok((StatusCode::CREATED, Json(wireman.into())))
}

/// Lists all registered wiremen
pub async fn list_wiremen(
    State(state): State<AppState>,
) -> Result<Json<Vec<WiremanResponse>>, ApiError> {
    let wiremen = state.wiremen.list().await?;
    Ok(Json(wiremen.into_iter().map(Into::into).collect()))
}

/// Gets a wireman by ID
pub async fn get_wireman(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WiremanResponse>, ApiError> {
    let wireman = state.wiremen.get(id.into()).await?;
    Ok(Json(wireman.into()))
}

/// Updates a wireman's name and contact info
pub async fn update_wireman(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWiremanRequest>,
) -> Result<Json<WiremanResponse>, ApiError> {
    request.validate()?;
    validate_wireman_input(&request.name)?;

    let wireman = state
        .wiremen
        .update(id.into(), &request.name, &request.contact_info)
        .await?;

    Ok(Json(wireman.into()))
}

/// Deletes a wireman and all associated records
pub async fn delete_wireman(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.wiremen.delete(id.into()).await?;
    Ok(Json(MessageResponse::new(
        "Wireman deleted along with all associated records.",
    )))
}
