//! Class repository.
//!
//! Single-statement CRUD over the `clases` table.

use super::types::{ClassRecord, ClassRow, ClassUpdate, NewClass};
use crate::db::DbPool;
use crate::Result;

/// Repository for class catalogue operations.
pub struct ClassRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ClassRepository<'a> {
    /// Create a new ClassRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert an active class and return its ID.
    pub async fn create(&self, new_class: &NewClass) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO clases (nombre_clase, modalidad, descripcion, imagen, estado)
             VALUES ($1, $2, $3, $4, $5) RETURNING id_clase",
        )
        .bind(&new_class.name)
        .bind(&new_class.modality)
        .bind(&new_class.description)
        .bind(&new_class.image)
        .bind(true)
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }

    /// Replace the descriptive fields of a class.
    ///
    /// Returns the number of affected rows.
    pub async fn update(&self, id: i64, update: &ClassUpdate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE clases
             SET nombre_clase = $1, modalidad = $2, descripcion = $3, imagen = $4
             WHERE id_clase = $5",
        )
        .bind(&update.name)
        .bind(&update.modality)
        .bind(&update.description)
        .bind(&update.image)
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Set the active flag. Returns the number of affected rows.
    pub async fn set_active(&self, id: i64, active: bool) -> Result<u64> {
        let result = sqlx::query("UPDATE clases SET estado = $1 WHERE id_clase = $2")
            .bind(active)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Get a class by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ClassRecord>> {
        let row: Option<ClassRow> = sqlx::query_as(
            "SELECT id_clase, nombre_clase, modalidad, descripcion, imagen, estado
             FROM clases WHERE id_clase = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ClassRow::into_class))
    }

    /// List classes with the given active flag, ordered by ID.
    pub async fn list_by_state(&self, active: bool) -> Result<Vec<ClassRecord>> {
        let rows: Vec<ClassRow> = sqlx::query_as(
            "SELECT id_clase, nombre_clase, modalidad, descripcion, imagen, estado
             FROM clases WHERE estado = $1
             ORDER BY id_clase",
        )
        .bind(active)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ClassRow::into_class).collect())
    }
}
