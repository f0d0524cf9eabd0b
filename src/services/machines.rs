//! Machines service
//!
//! Validates payloads against the machine vocabularies before touching the
//! store. A machine's location is a denormalized string; deleting a Location
//! entity leaves machines pointing at the old name on purpose.

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{self, MachineCategory, MachineStatus, MACHINE_LOCATIONS, RAM_SIZES, STORAGE_SIZES},
        machine::{CreateMachine, Machine, UpdateMachine},
    },
    repository::Repository,
};

use super::{required, trimmed};

#[derive(Clone)]
pub struct MachinesService {
    repository: Repository,
}

impl MachinesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Machine>> {
        self.repository.machines.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Machine> {
        self.repository.machines.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateMachine) -> AppResult<Machine> {
        data.name = Some(required(data.name.take(), "name")?);
        if data.machine_id.is_none() {
            return Err(AppError::Validation("machineID is required".to_string()));
        }

        let category = required(data.category.take(), "category")?;
        check_category(&category)?;
        data.category = Some(category);

        let status = required(data.status.take(), "status")?;
        check_status(&status)?;
        data.status = Some(status);

        data.processor = trimmed(data.processor.take());
        data.ram = trimmed(data.ram.take());
        data.storage = trimmed(data.storage.take());
        data.location = trimmed(data.location.take());
        data.assigned_user = trimmed(data.assigned_user.take());
        data.agent_url = trimmed(data.agent_url.take());
        data.description = trimmed(data.description.take());

        check_optional_set(&data.ram, &RAM_SIZES, "ram")?;
        check_optional_set(&data.storage, &STORAGE_SIZES, "storage")?;
        check_optional_set(&data.location, &MACHINE_LOCATIONS, "location")?;

        self.repository.machines.create(&data).await
    }

    pub async fn update(&self, id: i32, mut data: UpdateMachine) -> AppResult<Machine> {
        if let Some(name) = data.name.take() {
            data.name = Some(required(Some(name), "name")?);
        }
        if let Some(category) = trimmed(data.category.take()) {
            check_category(&category)?;
            data.category = Some(category);
        }
        if let Some(status) = trimmed(data.status.take()) {
            check_status(&status)?;
            data.status = Some(status);
        }

        data.processor = trimmed(data.processor.take());
        data.ram = trimmed(data.ram.take());
        data.storage = trimmed(data.storage.take());
        data.location = trimmed(data.location.take());
        data.assigned_user = trimmed(data.assigned_user.take());
        data.agent_url = trimmed(data.agent_url.take());
        data.description = trimmed(data.description.take());

        check_optional_set(&data.ram, &RAM_SIZES, "ram")?;
        check_optional_set(&data.storage, &STORAGE_SIZES, "storage")?;
        check_optional_set(&data.location, &MACHINE_LOCATIONS, "location")?;

        self.repository.machines.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.machines.delete(id).await
    }
}

fn check_category(token: &str) -> AppResult<()> {
    if MachineCategory::from_storage_token(token).is_none() {
        let allowed = MachineCategory::ALL.map(|c| c.storage_token()).join(", ");
        return Err(AppError::Validation(format!(
            "category must be one of: {}",
            allowed
        )));
    }
    Ok(())
}

fn check_status(token: &str) -> AppResult<()> {
    if MachineStatus::from_storage_token(token).is_none() {
        let allowed = MachineStatus::ALL.map(|s| s.storage_token()).join(", ");
        return Err(AppError::Validation(format!(
            "status must be one of: {}",
            allowed
        )));
    }
    Ok(())
}

fn check_optional_set(value: &Option<String>, set: &[&str], field: &str) -> AppResult<()> {
    if let Some(v) = value {
        if !set.contains(&v.as_str()) {
            return Err(AppError::Validation(format!(
                "{} must be one of: {}",
                field,
                enums::allowed_values(set)
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_check_rejects_ui_tokens() {
        // The store speaks Portuguese; English tokens belong to the dashboard.
        assert!(check_category("máquina").is_ok());
        assert!(check_category("machine").is_err());
    }

    #[test]
    fn test_status_check_lists_allowed_values() {
        let err = check_status("quebrado").unwrap_err();
        assert!(err.to_string().contains("em uso"));
        assert!(err.to_string().contains("disponível"));
    }

    #[test]
    fn test_optional_set_allows_absent() {
        assert!(check_optional_set(&None, &RAM_SIZES, "ram").is_ok());
        assert!(check_optional_set(&Some("8GB".to_string()), &RAM_SIZES, "ram").is_ok());
        assert!(check_optional_set(&Some("64GB".to_string()), &RAM_SIZES, "ram").is_err());
    }
}
