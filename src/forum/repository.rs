//! Forum repository.
//!
//! Statement-level access to `foro` and `foro_roles`. Every method runs on a
//! caller-supplied connection so the service can group statements inside one
//! transaction.

use chrono::{DateTime, Utc};

use super::types::{ForumPost, ForumPostUpdate, ForumRow, NewForumPost};
use crate::db::{DbConnection, SQL_TRUE};
use crate::Result;

const SELECT_COLUMNS: &str = "f.id_foro, f.id_administrador, f.titulo, f.descripcion,
                f.fecha_registro, f.fechaultimamodificacion, f.espublico";

/// Repository for forum statements on a single connection.
pub struct ForumRepository<'c> {
    conn: &'c mut DbConnection,
}

impl<'c> ForumRepository<'c> {
    /// Create a repository over the given connection or transaction.
    pub fn new(conn: &'c mut DbConnection) -> Self {
        Self { conn }
    }

    /// Insert the post row and return its generated id.
    pub async fn insert_post(&mut self, post: &NewForumPost, now: DateTime<Utc>) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO foro (id_administrador, titulo, descripcion, fecha_registro, espublico,
                               fechaultimamodificacion)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id_foro",
        )
        .bind(post.admin_id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.registered_at.naive_utc())
        .bind(post.visibility.is_public())
        .bind(now.naive_utc())
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(id)
    }

    /// Insert one grant row per role id.
    pub async fn insert_grants(&mut self, post_id: i64, role_ids: &[i64]) -> Result<u64> {
        let mut inserted = 0;
        for role_id in role_ids {
            let result = sqlx::query("INSERT INTO foro_roles (id_foro, id_rol) VALUES ($1, $2)")
                .bind(post_id)
                .bind(role_id)
                .execute(&mut *self.conn)
                .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// Replace the scalar fields of a post.
    ///
    /// Returns the number of affected rows (0 when the post does not exist).
    pub async fn update_post(&mut self, update: &ForumPostUpdate, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE foro
             SET id_administrador = $1,
                 titulo = $2,
                 descripcion = $3,
                 espublico = $4,
                 fechaultimamodificacion = $5
             WHERE id_foro = $6",
        )
        .bind(update.admin_id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.visibility.is_public())
        .bind(now.naive_utc())
        .bind(update.post_id)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete every grant of a post.
    pub async fn delete_grants(&mut self, post_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM foro_roles WHERE id_foro = $1")
            .bind(post_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every grant of a post, but only if `admin_id` owns it.
    pub async fn delete_owned_grants(&mut self, post_id: i64, admin_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM foro_roles
             WHERE id_foro = $1
               AND EXISTS (SELECT 1 FROM foro WHERE id_foro = $1 AND id_administrador = $2)",
        )
        .bind(post_id)
        .bind(admin_id)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the post row, but only if `admin_id` owns it.
    ///
    /// Returns 0 when the post is missing or belongs to someone else.
    pub async fn delete_owned_post(&mut self, post_id: i64, admin_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM foro WHERE id_foro = $1 AND id_administrador = $2")
            .bind(post_id)
            .bind(admin_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Posts that are public or granted to `role_id`, oldest first.
    pub async fn list_visible_to(&mut self, role_id: i64) -> Result<Vec<ForumPost>> {
        let query = format!(
            "SELECT {SELECT_COLUMNS}
             FROM foro f
             LEFT JOIN foro_roles fr ON f.id_foro = fr.id_foro AND fr.id_rol = $1
             WHERE f.espublico = {SQL_TRUE} OR fr.id_rol IS NOT NULL
             ORDER BY f.id_foro ASC"
        );
        let rows: Vec<ForumRow> = sqlx::query_as(&query)
            .bind(role_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.into_iter().map(ForumRow::into_post).collect())
    }

    /// Get a post by id.
    pub async fn get_by_id(&mut self, post_id: i64) -> Result<Option<ForumPost>> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM foro f WHERE f.id_foro = $1");
        let row: Option<ForumRow> = sqlx::query_as(&query)
            .bind(post_id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.map(ForumRow::into_post))
    }

    /// Role ids granted on a post, ascending.
    pub async fn grants_for(&mut self, post_id: i64) -> Result<Vec<i64>> {
        let roles: Vec<i64> =
            sqlx::query_scalar("SELECT id_rol FROM foro_roles WHERE id_foro = $1 ORDER BY id_rol")
                .bind(post_id)
                .fetch_all(&mut *self.conn)
                .await?;
        Ok(roles)
    }

    /// Count all posts.
    pub async fn count(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM foro")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }
}
