//! Phone-system lines API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::telsystem::{AssignTelSystem, CreateTelSystem, TelSystem, UpdateTelSystem},
};

use super::DeleteResponse;

/// List all phone lines
#[utoipa::path(
    get,
    path = "/telsystems",
    tag = "telsystems",
    responses(
        (status = 200, description = "Phone line list, newest first", body = Vec<TelSystem>)
    )
)]
pub async fn list_telsystems(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<TelSystem>>> {
    let lines = state.services.telsystems.list().await?;
    Ok(Json(lines))
}

/// Get phone line by ID
#[utoipa::path(
    get,
    path = "/telsystems/{id}",
    tag = "telsystems",
    params(("id" = i32, Path, description = "Phone line ID")),
    responses(
        (status = 200, description = "Phone line details", body = TelSystem),
        (status = 404, description = "Phone line not found")
    )
)]
pub async fn get_telsystem(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TelSystem>> {
    let line = state.services.telsystems.get_by_id(id).await?;
    Ok(Json(line))
}

/// Create phone line
#[utoipa::path(
    post,
    path = "/telsystems",
    tag = "telsystems",
    request_body = CreateTelSystem,
    responses(
        (status = 201, description = "Phone line created", body = TelSystem),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Number already carries this type")
    )
)]
pub async fn create_telsystem(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTelSystem>,
) -> AppResult<(StatusCode, Json<TelSystem>)> {
    let line = state.services.telsystems.create(data).await?;
    Ok((StatusCode::CREATED, Json(line)))
}

/// Assign a channel variant to a number
///
/// Upserts on (number, type): concurrent assignments of the same pair settle
/// on a single row instead of producing duplicates.
#[utoipa::path(
    post,
    path = "/telsystems/assign",
    tag = "telsystems",
    request_body = AssignTelSystem,
    responses(
        (status = 200, description = "Line assigned", body = TelSystem),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn assign_telsystem(
    State(state): State<crate::AppState>,
    Json(data): Json<AssignTelSystem>,
) -> AppResult<Json<TelSystem>> {
    let line = state.services.telsystems.assign(data).await?;
    Ok(Json(line))
}

/// Update phone line
#[utoipa::path(
    put,
    path = "/telsystems/{id}",
    tag = "telsystems",
    params(("id" = i32, Path, description = "Phone line ID")),
    request_body = UpdateTelSystem,
    responses(
        (status = 200, description = "Phone line updated", body = TelSystem),
        (status = 404, description = "Phone line not found")
    )
)]
pub async fn update_telsystem(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTelSystem>,
) -> AppResult<Json<TelSystem>> {
    let line = state.services.telsystems.update(id, data).await?;
    Ok(Json(line))
}

/// Delete phone line
#[utoipa::path(
    delete,
    path = "/telsystems/{id}",
    tag = "telsystems",
    params(("id" = i32, Path, description = "Phone line ID")),
    responses(
        (status = 200, description = "Phone line deleted", body = DeleteResponse),
        (status = 404, description = "Phone line not found")
    )
)]
pub async fn delete_telsystem(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.telsystems.delete(id).await?;
    Ok(Json(DeleteResponse::new("Phone line deleted successfully")))
}
