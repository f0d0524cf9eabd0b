//! Phone-system lines repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::telsystem::{CreateTelSystem, TelSystem, UpdateTelSystem},
};

#[derive(Clone)]
pub struct TelSystemsRepository {
    pool: Pool<Postgres>,
}

impl TelSystemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all lines, newest first
    pub async fn list(&self) -> AppResult<Vec<TelSystem>> {
        let rows =
            sqlx::query_as::<_, TelSystem>("SELECT * FROM telsystems ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get line by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<TelSystem> {
        sqlx::query_as::<_, TelSystem>("SELECT * FROM telsystems WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Phone line {} not found", id)))
    }

    /// Create line
    pub async fn create(&self, data: &CreateTelSystem) -> AppResult<TelSystem> {
        let row = sqlx::query_as::<_, TelSystem>(
            r#"
            INSERT INTO telsystems (number, line_type, consultant)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.number)
        .bind(&data.line_type)
        .bind(&data.consultant)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Assign a channel variant to a number.
    ///
    /// Single atomic upsert keyed by (number, line_type): two concurrent
    /// assignments of the same pair resolve to one row, the later consultant
    /// wins. There is no separate existence check anywhere in this path.
    pub async fn assign(
        &self,
        number: &str,
        line_type: &str,
        consultant: Option<&str>,
    ) -> AppResult<TelSystem> {
        let row = sqlx::query_as::<_, TelSystem>(
            r#"
            INSERT INTO telsystems (number, line_type, consultant)
            VALUES ($1, $2, $3)
            ON CONFLICT (number, line_type)
            DO UPDATE SET consultant = EXCLUDED.consultant, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(number)
        .bind(line_type)
        .bind(consultant)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update line (partial merge, always bumps updated_at)
    pub async fn update(&self, id: i32, data: &UpdateTelSystem) -> AppResult<TelSystem> {
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

        add_field!(data.number, "number");
        add_field!(data.line_type, "line_type");
        add_field!(data.consultant, "consultant");

        let query = format!(
            "UPDATE telsystems SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, TelSystem>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.number);
        bind_field!(data.line_type);
        bind_field!(data.consultant);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Phone line {} not found", id)))
    }

    /// Delete line
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM telsystems WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Phone line {} not found", id)));
        }
        Ok(())
    }
}
