//! Machine model
//!
//! Covers desktops as well as peripherals and monitors; the hardware fields
//! only apply to actual machines and stay null for the rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Machine record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Machine {
    pub id: i32,
    pub name: String,
    /// Inventory number, unique across machines
    #[serde(rename = "machineID")]
    pub machine_id: i32,
    /// Category storage token (máquina / periférico / monitor)
    pub category: String,
    /// Status storage token (em uso / manutenção / disponível)
    pub status: String,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub location: Option<String>,
    /// Name of the person the machine is handed to, free text
    #[serde(rename = "user")]
    pub assigned_user: Option<String>,
    /// Base URL of the desktop agent running on this machine
    #[serde(rename = "agentUrl")]
    pub agent_url: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create machine request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMachine {
    pub name: Option<String>,
    #[serde(rename = "machineID")]
    pub machine_id: Option<i32>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "user")]
    pub assigned_user: Option<String>,
    #[serde(rename = "agentUrl")]
    pub agent_url: Option<String>,
    pub description: Option<String>,
}

/// Update machine request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMachine {
    pub name: Option<String>,
    #[serde(rename = "machineID")]
    pub machine_id: Option<i32>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "user")]
    pub assigned_user: Option<String>,
    #[serde(rename = "agentUrl")]
    pub agent_url: Option<String>,
    pub description: Option<String>,
}
