//! Web API module.
//!
//! JSON over HTTP for the academy frontend: forum posts and the class
//! catalogue, gated by bearer tokens.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::JwtState;
pub use router::{create_app, create_router};
pub use server::WebServer;
