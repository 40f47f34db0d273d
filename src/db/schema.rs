//! Database schema and migrations.
//!
//! Migrations are applied in order when the database is opened; the
//! `schema_version` table records which ones have run.

/// Database migrations (SQLite dialect).
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: Forum posts and their role visibility grants
    r#"
CREATE TABLE foro (
    id_foro                 INTEGER PRIMARY KEY AUTOINCREMENT,
    id_administrador        INTEGER NOT NULL,
    titulo                  TEXT NOT NULL,
    descripcion             TEXT NOT NULL,
    fecha_registro          TEXT NOT NULL,
    fechaultimamodificacion TEXT NOT NULL,
    espublico               INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX idx_foro_administrador ON foro(id_administrador);

-- A grant lets one role see one private post
CREATE TABLE foro_roles (
    id_foro     INTEGER NOT NULL REFERENCES foro(id_foro),
    id_rol      INTEGER NOT NULL,
    PRIMARY KEY (id_foro, id_rol)
);

CREATE INDEX idx_foro_roles_rol ON foro_roles(id_rol);
"#,
    // v2: Class catalogue
    r#"
CREATE TABLE clases (
    id_clase        INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre_clase    TEXT NOT NULL,
    modalidad       TEXT NOT NULL,
    descripcion     TEXT NOT NULL,
    imagen          TEXT,
    estado          INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX idx_clases_estado ON clases(estado);
"#,
];

/// Database migrations (PostgreSQL dialect).
#[cfg(feature = "postgres")]
pub const MIGRATIONS: &[&str] = &[
    // v1: Forum posts and their role visibility grants
    r#"
CREATE TABLE foro (
    id_foro                 BIGSERIAL PRIMARY KEY,
    id_administrador        BIGINT NOT NULL,
    titulo                  TEXT NOT NULL,
    descripcion             TEXT NOT NULL,
    fecha_registro          TIMESTAMP NOT NULL,
    fechaultimamodificacion TIMESTAMP NOT NULL,
    espublico               BOOLEAN NOT NULL DEFAULT TRUE
);

CREATE INDEX idx_foro_administrador ON foro(id_administrador);

CREATE TABLE foro_roles (
    id_foro     BIGINT NOT NULL REFERENCES foro(id_foro),
    id_rol      BIGINT NOT NULL,
    PRIMARY KEY (id_foro, id_rol)
);

CREATE INDEX idx_foro_roles_rol ON foro_roles(id_rol);
"#,
    // v2: Class catalogue
    r#"
CREATE TABLE clases (
    id_clase        BIGSERIAL PRIMARY KEY,
    nombre_clase    TEXT NOT NULL,
    modalidad       TEXT NOT NULL,
    descripcion     TEXT NOT NULL,
    imagen          TEXT,
    estado          BOOLEAN NOT NULL DEFAULT TRUE
);

CREATE INDEX idx_clases_estado ON clases(estado);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }

    #[test]
    fn test_forum_migration_contains_both_tables() {
        let forum = MIGRATIONS[0];
        assert!(forum.contains("CREATE TABLE foro ("));
        assert!(forum.contains("id_administrador"));
        assert!(forum.contains("fechaultimamodificacion"));
        assert!(forum.contains("espublico"));
        assert!(forum.contains("CREATE TABLE foro_roles"));
        assert!(forum.contains("REFERENCES foro(id_foro)"));
        assert!(forum.contains("PRIMARY KEY (id_foro, id_rol)"));
    }

    #[test]
    fn test_forum_roles_has_no_cascade() {
        // Grant rows are removed explicitly by the forum service.
        assert!(!MIGRATIONS[0].contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_classes_migration() {
        let classes = MIGRATIONS[1];
        assert!(classes.contains("CREATE TABLE clases"));
        assert!(classes.contains("nombre_clase"));
        assert!(classes.contains("estado"));
    }
}
