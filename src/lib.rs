//! ACEDEMA - music academy administration backend.
//!
//! Forum posts with role-based visibility and the class catalogue, served as
//! a JSON API over a relational store.

pub mod auth;
pub mod classes;
pub mod config;
pub mod db;
pub mod error;
pub mod forum;
pub mod logging;
pub mod outcome;
pub mod web;

pub use auth::{
    can_list_for_role, require_administrator, require_same_administrator, PermissionError, Role,
};
pub use classes::{ClassRecord, ClassService, ClassUpdate, NewClass};
pub use config::Config;
pub use db::Database;
pub use error::{AcademyError, Result};
pub use forum::{ForumPost, ForumPostUpdate, ForumService, NewForumPost, Visibility};
pub use outcome::Outcome;
