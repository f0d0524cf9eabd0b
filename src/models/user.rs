//! User model
//!
//! Plain directory of people machines are handed to. No credentials, no
//! account concept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Update user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Result of the one-shot migration of machine holders into users
#[derive(Debug, Serialize, ToSchema)]
pub struct MigrationReport {
    pub ok: bool,
    /// Distinct holder names found on machines
    pub found: usize,
    /// Names newly inserted (already-existing names are left untouched)
    pub inserted: u64,
}
