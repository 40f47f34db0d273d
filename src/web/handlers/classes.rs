//! Class catalogue handlers for Web API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::{outcome_status, AppState};
use crate::classes::ClassService;
use crate::web::dto::{
    ClassListResponse, ClassMutationResponse, OutcomeResponse, RegisterClassRequest,
    UpdateClassRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// GET /api/clases/activas - List active classes.
pub async fn list_active_classes(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<ClassListResponse>), ApiError> {
    list_by_state(&state, &auth, true).await
}

/// GET /api/clases/desactivadas - List inactive classes.
pub async fn list_inactive_classes(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<ClassListResponse>), ApiError> {
    list_by_state(&state, &auth, false).await
}

async fn list_by_state(
    state: &AppState,
    auth: &AuthUser,
    active: bool,
) -> Result<(StatusCode, Json<ClassListResponse>), ApiError> {
    auth.require_administrator()?;

    let outcome = ClassService::new(&state.db).list_by_state(active).await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}

/// POST /api/clases - Register a class.
pub async fn register_class(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RegisterClassRequest>,
) -> Result<(StatusCode, Json<ClassMutationResponse>), ApiError> {
    auth.require_administrator()?;

    let outcome = ClassService::new(&state.db)
        .register(&req.into_new_class())
        .await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}

/// PUT /api/clases - Update a class.
pub async fn update_class(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateClassRequest>,
) -> Result<(StatusCode, Json<ClassMutationResponse>), ApiError> {
    auth.require_administrator()?;

    let (id, update) = req.into_update();
    let outcome = ClassService::new(&state.db).update(id, &update).await;

    let status = outcome_status(outcome.success, StatusCode::NOT_FOUND);
    Ok((status, Json(outcome.into())))
}

/// PUT /api/clases/:id/activar - Activate a class.
pub async fn activate_class(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<OutcomeResponse>), ApiError> {
    set_active(&state, &auth, id, true).await
}

/// PUT /api/clases/:id/desactivar - Deactivate a class.
pub async fn deactivate_class(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<OutcomeResponse>), ApiError> {
    set_active(&state, &auth, id, false).await
}

async fn set_active(
    state: &AppState,
    auth: &AuthUser,
    id: i64,
    active: bool,
) -> Result<(StatusCode, Json<OutcomeResponse>), ApiError> {
    auth.require_administrator()?;

    let outcome = ClassService::new(&state.db).set_active(id, active).await;

    let status = outcome_status(outcome.success, StatusCode::NOT_FOUND);
    Ok((status, Json(outcome.into())))
}
