//! Phone-system line model
//!
//! A number can exist before it is assigned: type and consultant arrive later
//! through the assignment operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Phone-system line record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TelSystem {
    pub id: i32,
    pub number: String,
    /// Channel variant storage token (Wtt1, Wtt2, clones, Business)
    #[serde(rename = "type")]
    pub line_type: Option<String>,
    pub consultant: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create phone-system line request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTelSystem {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub line_type: Option<String>,
    pub consultant: Option<String>,
}

/// Update phone-system line request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTelSystem {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub line_type: Option<String>,
    pub consultant: Option<String>,
}

/// Assign a channel variant to a number in one atomic step
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignTelSystem {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub line_type: Option<String>,
    pub consultant: Option<String>,
}
