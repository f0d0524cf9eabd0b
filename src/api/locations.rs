//! Locations API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::location::{CreateLocation, Location, UpdateLocation},
};

use super::DeleteResponse;

/// List all locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "Location list, alphabetical", body = Vec<Location>)
    )
)]
pub async fn list_locations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Location>>> {
    let locations = state.services.locations.list().await?;
    Ok(Json(locations))
}

/// Get location by ID
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location details", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Location>> {
    let location = state.services.locations.get_by_id(id).await?;
    Ok(Json(location))
}

/// Create location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Duplicate location name")
    )
)]
pub async fn create_location(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let location = state.services.locations.create(data).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Update location
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 404, description = "Location not found"),
        (status = 409, description = "Duplicate location name")
    )
)]
pub async fn update_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    let location = state.services.locations.update(id, data).await?;
    Ok(Json(location))
}

/// Delete location
///
/// Machines referencing this location by name are left as-is; the reference
/// is a plain string, not a foreign key.
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location deleted", body = DeleteResponse),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.locations.delete(id).await?;
    Ok(Json(DeleteResponse::new("Location deleted successfully")))
}
