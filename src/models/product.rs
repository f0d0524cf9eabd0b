//! Stock product model (legacy stock page)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Stock product record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create product request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

/// Update product request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}
