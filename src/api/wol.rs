//! Wake-on-LAN API endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Wake request
#[derive(Debug, Deserialize, ToSchema)]
pub struct WakeRequest {
    /// Target MAC address; `:`, `-` and `.` separators are accepted
    pub mac: Option<String>,
    /// Broadcast address to send the packet to (defaults to configuration)
    pub broadcast: Option<String>,
}

/// Wake confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct WakeResponse {
    pub ok: bool,
    /// Normalized MAC the packet was built for
    pub mac: String,
    /// Broadcast address the packet was sent to
    pub address: String,
}

/// Send a Wake-on-LAN magic packet
#[utoipa::path(
    post,
    path = "/wol",
    tag = "wol",
    request_body = WakeRequest,
    responses(
        (status = 200, description = "Magic packet sent", body = WakeResponse),
        (status = 400, description = "Invalid MAC address")
    )
)]
pub async fn wake(
    State(state): State<crate::AppState>,
    Json(data): Json<WakeRequest>,
) -> AppResult<Json<WakeResponse>> {
    let mac = data
        .mac
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("mac is required".to_string()))?;

    let (mac, address) = state
        .services
        .wol
        .wake(mac, data.broadcast.as_deref())
        .await?;

    Ok(Json(WakeResponse {
        ok: true,
        mac,
        address,
    }))
}
