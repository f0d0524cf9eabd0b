//! API handlers for the Inventário REST endpoints

pub mod chips;
pub mod health;
pub mod locations;
pub mod machines;
pub mod openapi;
pub mod products;
pub mod telsystems;
pub mod users;
pub mod wol;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
