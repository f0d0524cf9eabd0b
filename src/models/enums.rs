//! Closed vocabularies shared across entities
//!
//! Every enum-as-string field is backed by one of these types. Storage tokens
//! are the Portuguese strings persisted in the database; the machine category
//! and status additionally carry the English tokens the dashboard uses, with
//! a total mapping in both directions. Unmapped input is rejected, never
//! defaulted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MachineCategory
// ---------------------------------------------------------------------------

/// Machine category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MachineCategory {
    #[serde(rename = "máquina")]
    Maquina,
    #[serde(rename = "periférico")]
    Periferico,
    #[serde(rename = "monitor")]
    Monitor,
}

impl MachineCategory {
    pub const ALL: [MachineCategory; 3] = [
        MachineCategory::Maquina,
        MachineCategory::Periferico,
        MachineCategory::Monitor,
    ];

    /// Token persisted in the store
    pub fn storage_token(&self) -> &'static str {
        match self {
            MachineCategory::Maquina => "máquina",
            MachineCategory::Periferico => "periférico",
            MachineCategory::Monitor => "monitor",
        }
    }

    /// Token used by the dashboard
    pub fn ui_token(&self) -> &'static str {
        match self {
            MachineCategory::Maquina => "machine",
            MachineCategory::Periferico => "peripheral",
            MachineCategory::Monitor => "monitor",
        }
    }

    pub fn from_storage_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.storage_token() == s)
    }

    pub fn from_ui_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.ui_token() == s)
    }
}

impl std::fmt::Display for MachineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_token())
    }
}

// ---------------------------------------------------------------------------
// MachineStatus
// ---------------------------------------------------------------------------

/// Machine status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MachineStatus {
    #[serde(rename = "em uso")]
    EmUso,
    #[serde(rename = "manutenção")]
    Manutencao,
    #[serde(rename = "disponível")]
    Disponivel,
}

impl MachineStatus {
    pub const ALL: [MachineStatus; 3] = [
        MachineStatus::EmUso,
        MachineStatus::Manutencao,
        MachineStatus::Disponivel,
    ];

    pub fn storage_token(&self) -> &'static str {
        match self {
            MachineStatus::EmUso => "em uso",
            MachineStatus::Manutencao => "manutenção",
            MachineStatus::Disponivel => "disponível",
        }
    }

    pub fn ui_token(&self) -> &'static str {
        match self {
            MachineStatus::EmUso => "in-use",
            MachineStatus::Manutencao => "maintenance",
            MachineStatus::Disponivel => "available",
        }
    }

    pub fn from_storage_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.storage_token() == s)
    }

    pub fn from_ui_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.ui_token() == s)
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_token())
    }
}

// ---------------------------------------------------------------------------
// Machine hardware / placement value sets
// ---------------------------------------------------------------------------

/// Allowed RAM sizes
pub const RAM_SIZES: [&str; 5] = ["4GB", "6GB", "8GB", "16GB", "32GB"];

/// Allowed storage configurations
pub const STORAGE_SIZES: [&str; 7] = [
    "120GB SSD",
    "240GB SSD",
    "480GB SSD",
    "1TB SSD",
    "500GB HD",
    "1TB HD",
    "2TB HD",
];

/// Rooms a machine can be placed in
pub const MACHINE_LOCATIONS: [&str; 7] = [
    "SETOR MNT - SALA LINK",
    "SETOR MKT - SALA LINK",
    "SETOR BKO - SALA LINK",
    "OPERACIONAL",
    "COMERCIAL",
    "RH",
    "FINANCEIRO",
];

// ---------------------------------------------------------------------------
// ChipCarrier
// ---------------------------------------------------------------------------

/// SIM chip carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ChipCarrier {
    Vivo,
    Tim,
    Claro,
    Oi,
}

impl ChipCarrier {
    pub const ALL: [ChipCarrier; 4] = [
        ChipCarrier::Vivo,
        ChipCarrier::Tim,
        ChipCarrier::Claro,
        ChipCarrier::Oi,
    ];

    pub fn storage_token(&self) -> &'static str {
        match self {
            ChipCarrier::Vivo => "Vivo",
            ChipCarrier::Tim => "Tim",
            ChipCarrier::Claro => "Claro",
            ChipCarrier::Oi => "Oi",
        }
    }

    pub fn from_storage_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.storage_token() == s)
    }
}

// ---------------------------------------------------------------------------
// ChipStatus
// ---------------------------------------------------------------------------

/// SIM chip lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ChipStatus {
    #[serde(rename = "Ativo")]
    Ativo,
    #[serde(rename = "Ativo/Aracaju")]
    AtivoAracaju,
    #[serde(rename = "Aguardando Análise")]
    AguardandoAnalise,
    #[serde(rename = "Banido")]
    Banido,
    #[serde(rename = "Inativo")]
    Inativo,
    #[serde(rename = "Maturado")]
    Maturado,
    #[serde(rename = "Recarga Pendente")]
    RecargaPendente,
}

impl ChipStatus {
    pub const ALL: [ChipStatus; 7] = [
        ChipStatus::Ativo,
        ChipStatus::AtivoAracaju,
        ChipStatus::AguardandoAnalise,
        ChipStatus::Banido,
        ChipStatus::Inativo,
        ChipStatus::Maturado,
        ChipStatus::RecargaPendente,
    ];

    pub fn storage_token(&self) -> &'static str {
        match self {
            ChipStatus::Ativo => "Ativo",
            ChipStatus::AtivoAracaju => "Ativo/Aracaju",
            ChipStatus::AguardandoAnalise => "Aguardando Análise",
            ChipStatus::Banido => "Banido",
            ChipStatus::Inativo => "Inativo",
            ChipStatus::Maturado => "Maturado",
            ChipStatus::RecargaPendente => "Recarga Pendente",
        }
    }

    pub fn from_storage_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.storage_token() == s)
    }
}

// ---------------------------------------------------------------------------
// LineType
// ---------------------------------------------------------------------------

/// Phone-system channel variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LineType {
    #[serde(rename = "Wtt1")]
    Wtt1,
    #[serde(rename = "Wtt2")]
    Wtt2,
    #[serde(rename = "Wtt1 -clone")]
    Wtt1Clone,
    #[serde(rename = "Wtt2 -clone")]
    Wtt2Clone,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Business -clone")]
    BusinessClone,
}

impl LineType {
    pub const ALL: [LineType; 6] = [
        LineType::Wtt1,
        LineType::Wtt2,
        LineType::Wtt1Clone,
        LineType::Wtt2Clone,
        LineType::Business,
        LineType::BusinessClone,
    ];

    pub fn storage_token(&self) -> &'static str {
        match self {
            LineType::Wtt1 => "Wtt1",
            LineType::Wtt2 => "Wtt2",
            LineType::Wtt1Clone => "Wtt1 -clone",
            LineType::Wtt2Clone => "Wtt2 -clone",
            LineType::Business => "Business",
            LineType::BusinessClone => "Business -clone",
        }
    }

    pub fn from_storage_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.storage_token() == s)
    }
}

/// Render an allowed-values list for validation messages
pub fn allowed_values(tokens: &[&str]) -> String {
    tokens.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_total_both_ways() {
        for status in MachineStatus::ALL {
            assert_eq!(
                MachineStatus::from_storage_token(status.storage_token()),
                Some(status)
            );
            assert_eq!(MachineStatus::from_ui_token(status.ui_token()), Some(status));
        }
    }

    #[test]
    fn test_category_mapping_is_total_both_ways() {
        for category in MachineCategory::ALL {
            assert_eq!(
                MachineCategory::from_storage_token(category.storage_token()),
                Some(category)
            );
            assert_eq!(
                MachineCategory::from_ui_token(category.ui_token()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_unmapped_tokens_are_rejected() {
        assert_eq!(MachineStatus::from_storage_token("broken"), None);
        assert_eq!(MachineStatus::from_ui_token("unavailable"), None);
        assert_eq!(MachineCategory::from_ui_token("máquina"), None);
        assert_eq!(ChipCarrier::from_storage_token("vivo"), None);
        assert_eq!(LineType::from_storage_token("Wtt3"), None);
    }

    #[test]
    fn test_chip_status_round_trip() {
        for status in ChipStatus::ALL {
            assert_eq!(
                ChipStatus::from_storage_token(status.storage_token()),
                Some(status)
            );
        }
    }
}
