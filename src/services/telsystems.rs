//! Phone-system lines service

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::LineType,
        telsystem::{AssignTelSystem, CreateTelSystem, TelSystem, UpdateTelSystem},
    },
    repository::Repository,
};

use super::{required, trimmed};

#[derive(Clone)]
pub struct TelSystemsService {
    repository: Repository,
}

impl TelSystemsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<TelSystem>> {
        self.repository.telsystems.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TelSystem> {
        self.repository.telsystems.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateTelSystem) -> AppResult<TelSystem> {
        data.number = Some(required(data.number.take(), "number")?);

        if let Some(line_type) = trimmed(data.line_type.take()) {
            check_line_type(&line_type)?;
            data.line_type = Some(line_type);
        }
        data.consultant = trimmed(data.consultant.take());

        self.repository.telsystems.create(&data).await
    }

    /// Assign a channel variant to a number as one atomic upsert
    pub async fn assign(&self, data: AssignTelSystem) -> AppResult<TelSystem> {
        let number = required(data.number, "number")?;
        let line_type = required(data.line_type, "type")?;
        check_line_type(&line_type)?;
        let consultant = trimmed(data.consultant);

        self.repository
            .telsystems
            .assign(&number, &line_type, consultant.as_deref())
            .await
    }

    pub async fn update(&self, id: i32, mut data: UpdateTelSystem) -> AppResult<TelSystem> {
        data.number = trimmed(data.number.take());
        if let Some(line_type) = trimmed(data.line_type.take()) {
            check_line_type(&line_type)?;
            data.line_type = Some(line_type);
        }
        data.consultant = trimmed(data.consultant.take());

        self.repository.telsystems.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.telsystems.delete(id).await
    }
}

fn check_line_type(token: &str) -> AppResult<()> {
    if LineType::from_storage_token(token).is_none() {
        let allowed = LineType::ALL.map(|t| t.storage_token()).join(", ");
        return Err(AppError::Validation(format!(
            "type must be one of: {}",
            allowed
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_type_check() {
        assert!(check_line_type("Wtt1").is_ok());
        assert!(check_line_type("Wtt1 -clone").is_ok());
        assert!(check_line_type("Wtt3").is_err());
    }
}
