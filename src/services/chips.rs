//! SIM chips service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        chip::{Chip, CreateChip, UpdateChip},
        enums::{ChipCarrier, ChipStatus},
    },
    repository::Repository,
};

use super::{required, trimmed};

#[derive(Clone)]
pub struct ChipsService {
    repository: Repository,
}

impl ChipsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Chip>> {
        self.repository.chips.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Chip> {
        self.repository.chips.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateChip) -> AppResult<Chip> {
        data.ip = Some(required(data.ip.take(), "ip")?);
        data.number = Some(required(data.number.take(), "number")?);
        data.consultant = Some(required(data.consultant.take(), "consultant")?);

        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let carrier = required(data.carrier.take(), "carrier")?;
        check_carrier(&carrier)?;
        data.carrier = Some(carrier);

        let status = required(data.status.take(), "status")?;
        check_status(&status)?;
        data.status = Some(status);

        self.repository.chips.create(&data).await
    }

    pub async fn update(&self, id: i32, mut data: UpdateChip) -> AppResult<Chip> {
        data.ip = trimmed(data.ip.take());
        data.number = trimmed(data.number.take());
        data.consultant = trimmed(data.consultant.take());

        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(carrier) = trimmed(data.carrier.take()) {
            check_carrier(&carrier)?;
            data.carrier = Some(carrier);
        }
        if let Some(status) = trimmed(data.status.take()) {
            check_status(&status)?;
            data.status = Some(status);
        }

        self.repository.chips.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.chips.delete(id).await
    }
}

fn check_carrier(token: &str) -> AppResult<()> {
    if ChipCarrier::from_storage_token(token).is_none() {
        let allowed = ChipCarrier::ALL.map(|c| c.storage_token()).join(", ");
        return Err(AppError::Validation(format!(
            "carrier must be one of: {}",
            allowed
        )));
    }
    Ok(())
}

fn check_status(token: &str) -> AppResult<()> {
    if ChipStatus::from_storage_token(token).is_none() {
        let allowed = ChipStatus::ALL.map(|s| s.storage_token()).join(", ");
        return Err(AppError::Validation(format!(
            "status must be one of: {}",
            allowed
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_check() {
        assert!(check_carrier("Vivo").is_ok());
        assert!(check_carrier("Nextel").is_err());
    }

    #[test]
    fn test_status_check_accepts_all_seven_states() {
        for status in ChipStatus::ALL {
            assert!(check_status(status.storage_token()).is_ok());
        }
        assert!(check_status("Desconhecido").is_err());
    }

    #[test]
    fn test_create_payload_ip_pattern() {
        let data = CreateChip {
            ip: Some("1234".to_string()),
            number: Some("79999990000".to_string()),
            carrier: Some("Tim".to_string()),
            consultant: Some("Ana".to_string()),
            status: Some("Ativo".to_string()),
        };
        assert!(data.validate().is_err());

        let data = CreateChip {
            ip: Some("42".to_string()),
            ..data
        };
        assert!(data.validate().is_ok());
    }
}
