//! Locations service
//!
//! Locations are free-form named rooms, distinct from the fixed placement
//! vocabulary on machines. Name uniqueness is the store's concern.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location::{CreateLocation, Location, UpdateLocation},
    repository::Repository,
};

use super::{required, trimmed};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        self.repository.locations.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateLocation) -> AppResult<Location> {
        let name = required(data.name.take(), "name")?;
        data.name = Some(name);
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository
            .locations
            .create(data.name.as_deref().unwrap_or_default())
            .await
    }

    pub async fn update(&self, id: i32, mut data: UpdateLocation) -> AppResult<Location> {
        data.name = trimmed(data.name.take());
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        match data.name.as_deref() {
            Some(name) => self.repository.locations.update(id, name).await,
            // Empty payload: merge of nothing, only the timestamp moves.
            None => self.repository.locations.touch(id).await,
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.locations.delete(id).await
    }
}
