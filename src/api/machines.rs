//! Machines API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::machine::{CreateMachine, Machine, UpdateMachine},
};

use super::DeleteResponse;

/// List all machines
#[utoipa::path(
    get,
    path = "/machines",
    tag = "machines",
    responses(
        (status = 200, description = "Machine list", body = Vec<Machine>)
    )
)]
pub async fn list_machines(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Machine>>> {
    let machines = state.services.machines.list().await?;
    Ok(Json(machines))
}

/// Get machine by ID
#[utoipa::path(
    get,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i32, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Machine details", body = Machine),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn get_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Machine>> {
    let machine = state.services.machines.get_by_id(id).await?;
    Ok(Json(machine))
}

/// Create machine
#[utoipa::path(
    post,
    path = "/machines",
    tag = "machines",
    request_body = CreateMachine,
    responses(
        (status = 201, description = "Machine created", body = Machine),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Duplicate inventory number")
    )
)]
pub async fn create_machine(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMachine>,
) -> AppResult<(StatusCode, Json<Machine>)> {
    let machine = state.services.machines.create(data).await?;
    Ok((StatusCode::CREATED, Json(machine)))
}

/// Update machine
#[utoipa::path(
    put,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i32, Path, description = "Machine ID")),
    request_body = UpdateMachine,
    responses(
        (status = 200, description = "Machine updated", body = Machine),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn update_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMachine>,
) -> AppResult<Json<Machine>> {
    let machine = state.services.machines.update(id, data).await?;
    Ok(Json(machine))
}

/// Delete machine
#[utoipa::path(
    delete,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i32, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Machine deleted", body = DeleteResponse),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn delete_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.machines.delete(id).await?;
    Ok(Json(DeleteResponse::new("Machine deleted successfully")))
}
