//! SIM chip model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// The chip "ip" is a bare 1-3 digit suffix, not a full address
pub static CHIP_IP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}$").unwrap());

/// SIM chip record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Chip {
    pub id: i32,
    pub ip: String,
    pub number: String,
    /// Carrier storage token (Vivo / Tim / Claro / Oi)
    pub carrier: String,
    pub consultant: String,
    /// Status storage token, one of the seven chip lifecycle states
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create chip request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChip {
    #[validate(regex(path = *CHIP_IP_RE, message = "ip must be 1 to 3 digits"))]
    pub ip: Option<String>,
    pub number: Option<String>,
    pub carrier: Option<String>,
    pub consultant: Option<String>,
    pub status: Option<String>,
}

/// Update chip request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateChip {
    #[validate(regex(path = *CHIP_IP_RE, message = "ip must be 1 to 3 digits"))]
    pub ip: Option<String>,
    pub number: Option<String>,
    pub carrier: Option<String>,
    pub consultant: Option<String>,
    pub status: Option<String>,
}
