//! SIM chips repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::chip::{Chip, CreateChip, UpdateChip},
};

#[derive(Clone)]
pub struct ChipsRepository {
    pool: Pool<Postgres>,
}

impl ChipsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all chips, newest first
    pub async fn list(&self) -> AppResult<Vec<Chip>> {
        let rows = sqlx::query_as::<_, Chip>("SELECT * FROM chips ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get chip by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Chip> {
        sqlx::query_as::<_, Chip>("SELECT * FROM chips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chip {} not found", id)))
    }

    /// Create chip
    pub async fn create(&self, data: &CreateChip) -> AppResult<Chip> {
        let row = sqlx::query_as::<_, Chip>(
            r#"
            INSERT INTO chips (ip, number, carrier, consultant, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.ip)
        .bind(&data.number)
        .bind(&data.carrier)
        .bind(&data.consultant)
        .bind(&data.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update chip (partial merge, always bumps updated_at)
    pub async fn update(&self, id: i32, data: &UpdateChip) -> AppResult<Chip> {
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

        add_field!(data.ip, "ip");
        add_field!(data.number, "number");
        add_field!(data.carrier, "carrier");
        add_field!(data.consultant, "consultant");
        add_field!(data.status, "status");

        let query = format!(
            "UPDATE chips SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Chip>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.ip);
        bind_field!(data.number);
        bind_field!(data.carrier);
        bind_field!(data.consultant);
        bind_field!(data.status);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chip {} not found", id)))
    }

    /// Delete chip
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM chips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Chip {} not found", id)));
        }
        Ok(())
    }
}
