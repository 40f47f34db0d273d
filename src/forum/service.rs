//! Forum service.
//!
//! Create, update, list and delete forum posts together with their role
//! visibility grants. Mutations run inside one transaction: either the post
//! row and its whole grant set change together or nothing changes. Failures
//! never escape as errors; every operation answers with an [`Outcome`].

use chrono::Utc;
use tracing::{debug, error, warn};

use super::repository::ForumRepository;
use super::types::{ForumPost, ForumPostUpdate, NewForumPost};
use crate::db::{Database, DbConnection, DbTransaction};
use crate::outcome::Outcome;
use crate::Result;

/// Success message for create.
pub const MSG_CREATED: &str = "Foro creado correctamente.";
/// Success message for update.
pub const MSG_UPDATED: &str = "Foro actualizado correctamente.";
/// Success message for list.
pub const MSG_LISTED: &str = "Foros obtenidos correctamente.";
/// Success message for delete.
pub const MSG_DELETED: &str = "Foro eliminado correctamente.";
/// Update target does not exist.
pub const MSG_UPDATE_NOT_FOUND: &str = "No se encontró el foro a actualizar.";
/// Delete target does not exist or is owned by another administrator.
pub const MSG_DELETE_NOT_FOUND: &str = "No se encontró el foro o no pertenece al administrador.";
/// Title or description missing.
pub const MSG_REQUIRED_FIELDS: &str = "El título y la descripción son obligatorios.";

const CTX_CREATE: &str = "Error al crear foro";
const CTX_UPDATE: &str = "Error al actualizar foro";
const CTX_LIST: &str = "Error al obtener foros";
const CTX_DELETE: &str = "Error al eliminar foro";

/// Service for forum operations.
pub struct ForumService<'a> {
    db: &'a Database,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a post and, when restricted, its grant rows.
    ///
    /// On success the outcome carries the new post id.
    pub async fn create(&self, new_post: &NewForumPost) -> Outcome<i64> {
        debug!(admin_id = new_post.admin_id, "Creating forum post");

        if !has_required_fields(&new_post.title, &new_post.description) {
            return Outcome::failure(MSG_REQUIRED_FIELDS);
        }

        let mut tx = match self.db.begin().await {
            Ok(tx) => tx,
            Err(e) => return store_failure(CTX_CREATE, e),
        };

        match insert_with_grants(&mut tx, new_post).await {
            Ok(post_id) => match tx.commit().await {
                Ok(()) => {
                    debug!(post_id, "Forum post created");
                    Outcome::ok(MSG_CREATED, post_id)
                }
                Err(e) => store_failure(CTX_CREATE, e),
            },
            Err(e) => {
                rollback(tx).await;
                store_failure(CTX_CREATE, e)
            }
        }
    }

    /// Replace a post's fields and its entire grant set.
    ///
    /// Reports [`MSG_UPDATE_NOT_FOUND`] without touching any row when the
    /// post does not exist.
    pub async fn update(&self, update: &ForumPostUpdate) -> Outcome<i64> {
        debug!(post_id = update.post_id, "Updating forum post");

        if !has_required_fields(&update.title, &update.description) {
            return Outcome::failure(MSG_REQUIRED_FIELDS);
        }

        let mut tx = match self.db.begin().await {
            Ok(tx) => tx,
            Err(e) => return store_failure(CTX_UPDATE, e),
        };

        match replace_post(&mut tx, update).await {
            Ok(true) => match tx.commit().await {
                Ok(()) => {
                    debug!(post_id = update.post_id, "Forum post updated");
                    Outcome::ok(MSG_UPDATED, update.post_id)
                }
                Err(e) => store_failure(CTX_UPDATE, e),
            },
            Ok(false) => {
                rollback(tx).await;
                Outcome::failure(MSG_UPDATE_NOT_FOUND)
            }
            Err(e) => {
                rollback(tx).await;
                store_failure(CTX_UPDATE, e)
            }
        }
    }

    /// Posts that are public or granted to `role_id`.
    pub async fn list_visible_to(&self, role_id: i64) -> Outcome<Vec<ForumPost>> {
        debug!(role_id, "Listing forum posts");

        let mut conn = match self.db.pool().acquire().await {
            Ok(conn) => conn,
            Err(e) => return store_failure(CTX_LIST, e),
        };

        match ForumRepository::new(&mut conn).list_visible_to(role_id).await {
            Ok(posts) => Outcome::ok(MSG_LISTED, posts),
            Err(e) => store_failure(CTX_LIST, e),
        }
    }

    /// Delete a post and its grants if `admin_id` owns it.
    ///
    /// A missing post and a post owned by another administrator are reported
    /// with the same message.
    pub async fn delete(&self, post_id: i64, admin_id: i64) -> Outcome<()> {
        debug!(post_id, admin_id, "Deleting forum post");

        let mut tx = match self.db.begin().await {
            Ok(tx) => tx,
            Err(e) => return store_failure(CTX_DELETE, e),
        };

        match delete_owned(&mut tx, post_id, admin_id).await {
            Ok(true) => match tx.commit().await {
                Ok(()) => {
                    debug!(post_id, "Forum post deleted");
                    Outcome::ok_empty(MSG_DELETED)
                }
                Err(e) => store_failure(CTX_DELETE, e),
            },
            Ok(false) => {
                rollback(tx).await;
                Outcome::failure(MSG_DELETE_NOT_FOUND)
            }
            Err(e) => {
                rollback(tx).await;
                store_failure(CTX_DELETE, e)
            }
        }
    }
}

fn has_required_fields(title: &str, description: &str) -> bool {
    !title.trim().is_empty() && !description.trim().is_empty()
}

fn store_failure<T>(context: &str, err: impl Into<crate::AcademyError>) -> Outcome<T> {
    let err = err.into();
    error!("{}: {}", context, err);
    Outcome::store_failure(context, err)
}

async fn rollback(tx: DbTransaction) {
    if let Err(e) = tx.rollback().await {
        warn!("Transaction rollback failed: {}", e);
    }
}

async fn insert_with_grants(conn: &mut DbConnection, new_post: &NewForumPost) -> Result<i64> {
    let mut repo = ForumRepository::new(conn);
    let post_id = repo.insert_post(new_post, Utc::now()).await?;

    let grants = new_post.visibility.grants();
    if !grants.is_empty() {
        repo.insert_grants(post_id, grants).await?;
    }
    Ok(post_id)
}

/// Returns `false` when the post does not exist.
async fn replace_post(conn: &mut DbConnection, update: &ForumPostUpdate) -> Result<bool> {
    let mut repo = ForumRepository::new(conn);
    if repo.update_post(update, Utc::now()).await? == 0 {
        return Ok(false);
    }

    // Full replace: a public post ends with no grants.
    repo.delete_grants(update.post_id).await?;

    let grants = update.visibility.grants();
    if !grants.is_empty() {
        repo.insert_grants(update.post_id, grants).await?;
    }
    Ok(true)
}

/// Returns `false` when the post is missing or not owned by `admin_id`.
async fn delete_owned(conn: &mut DbConnection, post_id: i64, admin_id: i64) -> Result<bool> {
    let mut repo = ForumRepository::new(conn);
    repo.delete_owned_grants(post_id, admin_id).await?;
    Ok(repo.delete_owned_post(post_id, admin_id).await? > 0)
}
