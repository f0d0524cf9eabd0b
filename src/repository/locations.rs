//! Locations repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::location::Location,
};

#[derive(Clone)]
pub struct LocationsRepository {
    pool: Pool<Postgres>,
}

impl LocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all locations, alphabetically
    pub async fn list(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get location by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))
    }

    /// Create location
    pub async fn create(&self, name: &str) -> AppResult<Location> {
        let row = sqlx::query_as::<_, Location>(
            "INSERT INTO locations (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename location
    pub async fn update(&self, id: i32, name: &str) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "UPDATE locations SET name = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))
    }

    /// Touch location without changing its name (empty update payload)
    pub async fn touch(&self, id: i32) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "UPDATE locations SET updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))
    }

    /// Delete location
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Location {} not found", id)));
        }
        Ok(())
    }
}
