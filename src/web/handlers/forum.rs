//! Forum handlers for Web API.
//!
//! Mutations are reserved to administrators, and the `adminId` in the body
//! must be the caller's own. Every failed outcome maps to 400, including
//! not-found.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::{outcome_status, AppState};
use crate::auth::can_list_for_role;
use crate::forum::ForumService;
use crate::web::dto::{
    CreateForumRequest, DeleteForumRequest, ForumListResponse, ForumMutationResponse,
    ListForumsQuery, OutcomeResponse, UpdateForumRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// POST /api/foros - Create a forum post.
pub async fn create_forum(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateForumRequest>,
) -> Result<(StatusCode, Json<ForumMutationResponse>), ApiError> {
    auth.require_acting_administrator(req.admin_id)?;

    let outcome = ForumService::new(&state.db)
        .create(&req.into_new_post())
        .await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}

/// PUT /api/foros - Replace a forum post and its grants.
pub async fn update_forum(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateForumRequest>,
) -> Result<(StatusCode, Json<ForumMutationResponse>), ApiError> {
    auth.require_acting_administrator(req.admin_id)?;

    let outcome = ForumService::new(&state.db)
        .update(&req.into_update())
        .await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}

/// GET /api/foros?roleId= - List posts visible to a role.
///
/// Non-administrators may only list posts for their own role.
pub async fn list_forums(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    query: Result<Query<ListForumsQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ForumListResponse>), ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::bad_request(format!("Invalid query: {}", e.body_text())))?;

    can_list_for_role(auth.role()?, auth.0.role_id, query.role_id)?;

    let outcome = ForumService::new(&state.db)
        .list_visible_to(query.role_id)
        .await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}

/// DELETE /api/foros - Delete a post owned by the calling administrator.
pub async fn delete_forum(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<DeleteForumRequest>,
) -> Result<(StatusCode, Json<OutcomeResponse>), ApiError> {
    auth.require_acting_administrator(req.admin_id)?;

    let outcome = ForumService::new(&state.db)
        .delete(req.forum_id, req.admin_id)
        .await;

    let status = outcome_status(outcome.success, StatusCode::BAD_REQUEST);
    Ok((status, Json(outcome.into())))
}
