//! Class catalogue service.

use tracing::{debug, error};

use super::repository::ClassRepository;
use super::types::{ClassRecord, ClassUpdate, NewClass};
use crate::db::Database;
use crate::outcome::Outcome;

/// Success message for register.
pub const MSG_REGISTERED: &str = "Clase registrada correctamente.";
/// Success message for update.
pub const MSG_UPDATED: &str = "Clase actualizada correctamente.";
/// Success message for activation.
pub const MSG_ACTIVATED: &str = "Clase activada correctamente.";
/// Success message for deactivation.
pub const MSG_DEACTIVATED: &str = "Clase desactivada correctamente.";
/// Success message for list.
pub const MSG_LISTED: &str = "Clases obtenidas correctamente.";
/// Update matched no class.
pub const MSG_UPDATE_NOT_FOUND: &str = "Clase no encontrada o sin cambios.";
/// State change matched no class.
pub const MSG_NOT_FOUND: &str = "Clase no encontrada.";

const CTX_REGISTER: &str = "Error inesperado al registrar la clase";
const CTX_UPDATE: &str = "Error inesperado al actualizar la clase";
const CTX_SET_ACTIVE: &str = "Error inesperado al cambiar el estado";
const CTX_LIST: &str = "Error al obtener clases";

/// Service for class catalogue operations.
pub struct ClassService<'a> {
    db: &'a Database,
}

impl<'a> ClassService<'a> {
    /// Create a new ClassService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new, active class. The outcome carries its ID.
    pub async fn register(&self, new_class: &NewClass) -> Outcome<i64> {
        debug!(name = %new_class.name, "Registering class");
        let repo = ClassRepository::new(self.db.pool());

        match repo.create(new_class).await {
            Ok(id) => Outcome::ok(MSG_REGISTERED, id),
            Err(e) => {
                error!("{}: {}", CTX_REGISTER, e);
                Outcome::store_failure(CTX_REGISTER, e)
            }
        }
    }

    /// Replace a class's descriptive fields.
    pub async fn update(&self, id: i64, update: &ClassUpdate) -> Outcome<i64> {
        debug!(id, "Updating class");
        let repo = ClassRepository::new(self.db.pool());

        match repo.update(id, update).await {
            Ok(0) => Outcome::failure(MSG_UPDATE_NOT_FOUND),
            Ok(_) => Outcome::ok(MSG_UPDATED, id),
            Err(e) => {
                error!("{}: {}", CTX_UPDATE, e);
                Outcome::store_failure(CTX_UPDATE, e)
            }
        }
    }

    /// Activate or deactivate a class.
    pub async fn set_active(&self, id: i64, active: bool) -> Outcome<()> {
        debug!(id, active, "Changing class state");
        let repo = ClassRepository::new(self.db.pool());

        match repo.set_active(id, active).await {
            Ok(0) => Outcome::failure(MSG_NOT_FOUND),
            Ok(_) if active => Outcome::ok_empty(MSG_ACTIVATED),
            Ok(_) => Outcome::ok_empty(MSG_DEACTIVATED),
            Err(e) => {
                error!("{}: {}", CTX_SET_ACTIVE, e);
                Outcome::store_failure(CTX_SET_ACTIVE, e)
            }
        }
    }

    /// All classes with the given state.
    pub async fn list_by_state(&self, active: bool) -> Outcome<Vec<ClassRecord>> {
        debug!(active, "Listing classes");
        let repo = ClassRepository::new(self.db.pool());

        match repo.list_by_state(active).await {
            Ok(classes) => Outcome::ok(MSG_LISTED, classes),
            Err(e) => {
                error!("{}: {}", CTX_LIST, e);
                Outcome::store_failure(CTX_LIST, e)
            }
        }
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_register() {
        let db = setup_db().await;
        let service = ClassService::new(&db);

        let outcome = service
            .register(&NewClass::new("Piano", "Presencial", "Piano inicial"))
            .await;
        assert!(outcome.success);
        assert_eq!(outcome.message, MSG_REGISTERED);
        assert!(outcome.data.is_some());
    }

    #[tokio::test]
    async fn test_update_missing() {
        let db = setup_db().await;
        let service = ClassService::new(&db);

        let update: ClassUpdate = NewClass::new("Piano", "Presencial", "...").into();
        let outcome = service.update(999, &update).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, MSG_UPDATE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let db = setup_db().await;
        let service = ClassService::new(&db);
        let id = service
            .register(&NewClass::new("Piano", "Presencial", "..."))
            .await
            .data
            .unwrap();

        let update: ClassUpdate = NewClass::new("Piano II", "Presencial", "...").into();
        let outcome = service.update(id, &update).await;
        assert!(outcome.success);
        assert_eq!(outcome.data, Some(id));
    }

    #[tokio::test]
    async fn test_deactivate_and_activate() {
        let db = setup_db().await;
        let service = ClassService::new(&db);
        let id = service
            .register(&NewClass::new("Piano", "Presencial", "..."))
            .await
            .data
            .unwrap();

        let outcome = service.set_active(id, false).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, MSG_DEACTIVATED);
        assert!(service.list_by_state(true).await.data.unwrap().is_empty());
        assert_eq!(service.list_by_state(false).await.data.unwrap().len(), 1);

        let outcome = service.set_active(id, true).await;
        assert_eq!(outcome.message, MSG_ACTIVATED);
        assert_eq!(service.list_by_state(true).await.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_active_missing() {
        let db = setup_db().await;
        let service = ClassService::new(&db);

        let outcome = service.set_active(999, true).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, MSG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let db = setup_db().await;
        sqlx::query("DROP TABLE clases")
            .execute(db.pool())
            .await
            .unwrap();
        let service = ClassService::new(&db);

        let outcome = service.list_by_state(true).await;
        assert!(!outcome.success);
        assert!(outcome.message.starts_with("Error al obtener clases: "));
        assert_eq!(outcome.errors.len(), 1);
    }
}
