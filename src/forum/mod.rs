//! Forum module.
//!
//! Administrator-authored forum posts with role-based visibility:
//! - Post creation with an optional set of granted roles
//! - Full replacement of a post and its grant set
//! - Listing the posts a role is allowed to see
//! - Owner-only deletion

mod repository;
mod service;
mod types;

pub use repository::ForumRepository;
pub use service::{
    ForumService, MSG_CREATED, MSG_DELETED, MSG_DELETE_NOT_FOUND, MSG_LISTED,
    MSG_REQUIRED_FIELDS, MSG_UPDATED, MSG_UPDATE_NOT_FOUND,
};
pub use types::{ForumPost, ForumPostUpdate, NewForumPost, Visibility};
