//! Machines repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::machine::{CreateMachine, Machine, UpdateMachine},
};

#[derive(Clone)]
pub struct MachinesRepository {
    pool: Pool<Postgres>,
}

impl MachinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all machines
    pub async fn list(&self) -> AppResult<Vec<Machine>> {
        let rows = sqlx::query_as::<_, Machine>("SELECT * FROM machines ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get machine by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Machine {} not found", id)))
    }

    /// Create machine
    pub async fn create(&self, data: &CreateMachine) -> AppResult<Machine> {
        let row = sqlx::query_as::<_, Machine>(
            r#"
            INSERT INTO machines
                (name, machine_id, category, status, processor, ram, storage,
                 location, assigned_user, agent_url, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.machine_id)
        .bind(&data.category)
        .bind(&data.status)
        .bind(&data.processor)
        .bind(&data.ram)
        .bind(&data.storage)
        .bind(&data.location)
        .bind(&data.assigned_user)
        .bind(&data.agent_url)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update machine (partial merge, always bumps updated_at)
    pub async fn update(&self, id: i32, data: &UpdateMachine) -> AppResult<Machine> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.machine_id, "machine_id");
        add_field!(data.category, "category");
        add_field!(data.status, "status");
        add_field!(data.processor, "processor");
        add_field!(data.ram, "ram");
        add_field!(data.storage, "storage");
        add_field!(data.location, "location");
        add_field!(data.assigned_user, "assigned_user");
        add_field!(data.agent_url, "agent_url");
        add_field!(data.description, "description");

        let query = format!(
            "UPDATE machines SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Machine>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.machine_id);
        bind_field!(data.category);
        bind_field!(data.status);
        bind_field!(data.processor);
        bind_field!(data.ram);
        bind_field!(data.storage);
        bind_field!(data.location);
        bind_field!(data.assigned_user);
        bind_field!(data.agent_url);
        bind_field!(data.description);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Machine {} not found", id)))
    }

    /// Delete machine
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM machines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Machine {} not found", id)));
        }
        Ok(())
    }
}
