//! API handlers for Web UI.

pub mod classes;
pub mod forum;
pub mod state;

pub use classes::*;
pub use forum::*;
pub use state::AppState;

use axum::http::StatusCode;

/// HTTP status for a service outcome: 200 on success, `failure` otherwise.
pub(crate) fn outcome_status(success: bool, failure: StatusCode) -> StatusCode {
    if success {
        StatusCode::OK
    } else {
        failure
    }
}
