//! JWT authentication middleware.
//!
//! Tokens are issued elsewhere; this layer only verifies them and exposes the
//! caller's role to handlers.

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{self, Role};
use crate::web::error::ApiError;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Username.
    pub username: String,
    /// Role name, e.g. `Administrador`.
    pub role: String,
    /// Numeric role ID used for forum visibility.
    #[serde(rename = "roleId")]
    pub role_id: i64,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// Application state for JWT authentication.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key for JWT verification.
    pub decoding_key: DecodingKey,
    /// Validation settings.
    pub validation: Validation,
}

impl JwtState {
    /// Create a new JWT state from a secret key.
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }
}

/// Extractor for authenticated users.
///
/// The handler receives the JWT claims if the bearer token is valid.
#[derive(Debug, Clone)]
pub struct AuthUser(pub JwtClaims);

impl AuthUser {
    /// The caller's role. Unknown role names are forbidden.
    pub fn role(&self) -> Result<Role, ApiError> {
        self.0
            .role
            .parse::<Role>()
            .map_err(|_| ApiError::forbidden("Unknown role"))
    }

    /// Fail with 403 unless the caller is an administrator.
    pub fn require_administrator(&self) -> Result<(), ApiError> {
        auth::require_administrator(self.role()?)?;
        Ok(())
    }

    /// Fail with 403 unless the caller is the administrator `admin_id`.
    pub fn require_acting_administrator(&self, admin_id: i64) -> Result<(), ApiError> {
        self.require_administrator()?;
        auth::require_same_administrator(self.0.sub, admin_id)?;
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

        // Set by jwt_auth
        let jwt_state = parts
            .extensions
            .get::<Arc<JwtState>>()
            .ok_or_else(|| ApiError::internal("JWT state not configured"))?;

        let token_data = decode::<JwtClaims>(token, &jwt_state.decoding_key, &jwt_state.validation)
            .map_err(|e| {
                tracing::debug!("JWT validation failed: {}", e);
                ApiError::unauthorized("Invalid or expired token")
            })?;

        Ok(AuthUser(token_data.claims))
    }
}

/// Middleware function to inject JWT state into request extensions.
pub async fn jwt_auth(
    jwt_state: Arc<JwtState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(jwt_state);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::error::ErrorCode;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn create_test_token(secret: &str, claims: &JwtClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(role: &str, exp_offset: i64) -> JwtClaims {
        let now = chrono::Utc::now().timestamp();
        JwtClaims {
            sub: 1,
            username: "direccion".to_string(),
            role: role.to_string(),
            role_id: 1,
            iat: now as u64,
            exp: (now + exp_offset) as u64,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_jwt_state_new() {
        let state = JwtState::new("test-secret");
        assert!(state.validation.validate_exp);
    }

    #[test]
    fn test_create_and_verify_token() {
        let secret = "test-secret";
        let state = JwtState::new(secret);

        let token = create_test_token(secret, &claims("Administrador", 3600));

        let decoded = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation).unwrap();
        assert_eq!(decoded.claims.sub, 1);
        assert_eq!(decoded.claims.role, "Administrador");
        assert_eq!(decoded.claims.role_id, 1);
    }

    #[test]
    fn test_claims_use_camel_case_role_id() {
        let json = serde_json::to_value(claims("Profesor", 3600)).unwrap();
        assert_eq!(json["roleId"], 1);
        assert!(json.get("role_id").is_none());
    }

    #[test]
    fn test_expired_token() {
        let secret = "test-secret";
        let state = JwtState::new(secret);

        // Beyond the default leeway
        let token = create_test_token(secret, &claims("Administrador", -3600));

        let result = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_secret() {
        let token = create_test_token("secret1", &claims("Administrador", 3600));
        let state = JwtState::new("secret2");

        let result = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation);
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_user_role_gate() {
        let admin = AuthUser(claims("Administrador", 3600));
        assert_eq!(admin.role().unwrap(), Role::Administrator);
        assert!(admin.require_administrator().is_ok());

        let student = AuthUser(claims("Estudiante", 3600));
        let err = student.require_administrator().unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);

        let unknown = AuthUser(claims("Invitado", 3600));
        assert_eq!(unknown.role().unwrap_err().code(), ErrorCode::Forbidden);
    }

    #[test]
    fn test_acting_administrator_must_match_token() {
        let admin = AuthUser(claims("Administrador", 3600));
        assert!(admin.require_acting_administrator(1).is_ok());
        assert_eq!(
            admin.require_acting_administrator(5).unwrap_err().code(),
            ErrorCode::Forbidden
        );

        let professor = AuthUser(claims("Profesor", 3600));
        assert_eq!(
            professor.require_acting_administrator(1).unwrap_err().code(),
            ErrorCode::Forbidden
        );
    }
}
