//! SIM chips API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::chip::{Chip, CreateChip, UpdateChip},
};

use super::DeleteResponse;

/// List all chips
#[utoipa::path(
    get,
    path = "/chips",
    tag = "chips",
    responses(
        (status = 200, description = "Chip list, newest first", body = Vec<Chip>)
    )
)]
pub async fn list_chips(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Chip>>> {
    let chips = state.services.chips.list().await?;
    Ok(Json(chips))
}

/// Get chip by ID
#[utoipa::path(
    get,
    path = "/chips/{id}",
    tag = "chips",
    params(("id" = i32, Path, description = "Chip ID")),
    responses(
        (status = 200, description = "Chip details", body = Chip),
        (status = 404, description = "Chip not found")
    )
)]
pub async fn get_chip(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Chip>> {
    let chip = state.services.chips.get_by_id(id).await?;
    Ok(Json(chip))
}

/// Create chip
#[utoipa::path(
    post,
    path = "/chips",
    tag = "chips",
    request_body = CreateChip,
    responses(
        (status = 201, description = "Chip created", body = Chip),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_chip(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateChip>,
) -> AppResult<(StatusCode, Json<Chip>)> {
    let chip = state.services.chips.create(data).await?;
    Ok((StatusCode::CREATED, Json(chip)))
}

/// Update chip
#[utoipa::path(
    put,
    path = "/chips/{id}",
    tag = "chips",
    params(("id" = i32, Path, description = "Chip ID")),
    request_body = UpdateChip,
    responses(
        (status = 200, description = "Chip updated", body = Chip),
        (status = 404, description = "Chip not found")
    )
)]
pub async fn update_chip(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateChip>,
) -> AppResult<Json<Chip>> {
    let chip = state.services.chips.update(id, data).await?;
    Ok(Json(chip))
}

/// Delete chip
#[utoipa::path(
    delete,
    path = "/chips/{id}",
    tag = "chips",
    params(("id" = i32, Path, description = "Chip ID")),
    responses(
        (status = 200, description = "Chip deleted", body = DeleteResponse),
        (status = 404, description = "Chip not found")
    )
)]
pub async fn delete_chip(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.chips.delete(id).await?;
    Ok(Json(DeleteResponse::new("Chip deleted successfully")))
}
