//! Users service

use crate::{
    error::AppResult,
    models::user::{CreateUser, MigrationReport, UpdateUser, User},
    repository::Repository,
};

use super::{required, trimmed};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        let name = required(data.name, "name")?;
        let email = trimmed(data.email).map(|e| e.to_lowercase());

        self.repository.users.create(&name, email.as_deref()).await
    }

    pub async fn update(&self, id: i32, mut data: UpdateUser) -> AppResult<User> {
        if let Some(name) = data.name.take() {
            data.name = Some(required(Some(name), "name")?);
        }
        data.email = trimmed(data.email.take()).map(|e| e.to_lowercase());

        self.repository.users.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.users.delete(id).await
    }

    /// One-shot import of machine holder names into the users collection
    pub async fn migrate_from_machines(&self) -> AppResult<MigrationReport> {
        let found = self.repository.users.count_machine_holders().await? as usize;
        let inserted = if found > 0 {
            self.repository.users.migrate_from_machines().await?
        } else {
            0
        };

        tracing::info!(found, inserted, "migrated machine holders into users");

        Ok(MigrationReport {
            ok: true,
            found,
            inserted,
        })
    }
}
