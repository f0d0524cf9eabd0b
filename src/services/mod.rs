//! Business logic services

pub mod chips;
pub mod locations;
pub mod machines;
pub mod products;
pub mod telsystems;
pub mod users;
pub mod wol;

use crate::{
    config::WolConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub machines: machines::MachinesService,
    pub chips: chips::ChipsService,
    pub telsystems: telsystems::TelSystemsService,
    pub locations: locations::LocationsService,
    pub users: users::UsersService,
    pub products: products::ProductsService,
    pub wol: wol::WolService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, wol_config: WolConfig) -> Self {
        Self {
            machines: machines::MachinesService::new(repository.clone()),
            chips: chips::ChipsService::new(repository.clone()),
            telsystems: telsystems::TelSystemsService::new(repository.clone()),
            locations: locations::LocationsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            products: products::ProductsService::new(repository),
            wol: wol::WolService::new(wol_config),
        }
    }
}

/// Trim a string field; empty strings collapse to None
pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim().to_string();
        if t.is_empty() {
            None
        } else {
            Some(t)
        }
    })
}

/// Trim a required string field, rejecting absent or blank input
pub(crate) fn required(value: Option<String>, field: &str) -> AppResult<String> {
    trimmed(value).ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_collapses_blank_to_none() {
        assert_eq!(trimmed(Some("  ".to_string())), None);
        assert_eq!(trimmed(Some(" a ".to_string())), Some("a".to_string()));
        assert_eq!(trimmed(None), None);
    }

    #[test]
    fn test_required_cites_the_field() {
        let err = required(None, "machineID").unwrap_err();
        assert!(err.to_string().contains("machineID"));
    }
}
