//! Test helpers for Web API tests.
//!
//! Builds the full application over an in-memory database and mints bearer
//! tokens for the academy roles.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};

use acedema::web::middleware::JwtClaims;
use acedema::web::{create_app, AppState, JwtState};
use acedema::Database;

/// Secret shared by the test server and the minted tokens.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Role id carried by administrator tokens.
pub const ADMIN_ROLE_ID: i64 = 1;
/// Role id carried by professor tokens.
pub const PROFESSOR_ROLE_ID: i64 = 2;
/// Role id carried by student tokens.
pub const STUDENT_ROLE_ID: i64 = 3;

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone()));
    let jwt_state = Arc::new(JwtState::new(TEST_SECRET));
    let router = create_app(app_state, jwt_state, &[]);

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Mint a token signed with `secret`.
pub fn token_with_secret(secret: &str, user_id: i64, role: &str, role_id: i64, ttl: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = JwtClaims {
        sub: user_id,
        username: format!("user{user_id}"),
        role: role.to_string(),
        role_id,
        iat: now as u64,
        exp: (now + ttl) as u64,
        jti: uuid::Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode token")
}

/// Bearer header value for an administrator.
pub fn admin_bearer(admin_id: i64) -> String {
    format!(
        "Bearer {}",
        token_with_secret(TEST_SECRET, admin_id, "Administrador", ADMIN_ROLE_ID, 3600)
    )
}

/// Bearer header value for a professor.
pub fn professor_bearer() -> String {
    format!(
        "Bearer {}",
        token_with_secret(TEST_SECRET, 20, "Profesor", PROFESSOR_ROLE_ID, 3600)
    )
}

/// Bearer header value for a student.
pub fn student_bearer() -> String {
    format!(
        "Bearer {}",
        token_with_secret(TEST_SECRET, 30, "Estudiante", STUDENT_ROLE_ID, 3600)
    )
}
