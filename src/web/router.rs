//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    activate_class, create_forum, deactivate_class, delete_forum, list_active_classes,
    list_forums, list_inactive_classes, register_class, update_class, update_forum, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let forum_routes = Router::new().route(
        "/foros",
        get(list_forums)
            .post(create_forum)
            .put(update_forum)
            .delete(delete_forum),
    );

    let class_routes = Router::new()
        .route("/clases", put(update_class).post(register_class))
        .route("/clases/activas", get(list_active_classes))
        .route("/clases/desactivadas", get(list_inactive_classes))
        .route("/clases/:id/activar", put(activate_class))
        .route("/clases/:id/desactivar", put(deactivate_class));

    let api_routes = Router::new().merge(forum_routes).merge(class_routes);

    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Full application: API routes, health check and gzip compression.
pub fn create_app(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    create_router(app_state, jwt_state, cors_origins)
        .merge(create_health_router())
        .layer(CompressionLayer::new())
}
