//! Stock products API endpoints (legacy stock page)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product, UpdateProduct},
};

use super::DeleteResponse;

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "Product list", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.services.products.list().await?;
    Ok(Json(products))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = state.services.products.get_by_id(id).await?;
    Ok(Json(product))
}

/// Create product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_product(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.services.products.create(data).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = state.services.products.update(id, data).await?;
    Ok(Json(product))
}

/// Delete product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.products.delete(id).await?;
    Ok(Json(DeleteResponse::new("Product deleted successfully")))
}
