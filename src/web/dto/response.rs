//! Response DTOs for Web API.
//!
//! Every body carries the `success`, `message` and `errors` fields of the
//! service outcome; the payload is projected into an operation-specific field.

use serde::Serialize;

use crate::classes::ClassRecord;
use crate::forum::ForumPost;
use crate::outcome::Outcome;

/// Outcome without a payload.
#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
}

impl<T> From<Outcome<T>> for OutcomeResponse {
    fn from(outcome: Outcome<T>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            errors: outcome.errors,
        }
    }
}

/// Result of creating or updating a forum post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumMutationResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    /// Affected post ID (only on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_id: Option<i64>,
}

impl From<Outcome<i64>> for ForumMutationResponse {
    fn from(outcome: Outcome<i64>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            errors: outcome.errors,
            forum_id: outcome.data,
        }
    }
}

/// Forum posts visible to a role.
#[derive(Debug, Serialize)]
pub struct ForumListResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    /// Empty on failure.
    pub posts: Vec<ForumPost>,
}

impl From<Outcome<Vec<ForumPost>>> for ForumListResponse {
    fn from(outcome: Outcome<Vec<ForumPost>>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            errors: outcome.errors,
            posts: outcome.data.unwrap_or_default(),
        }
    }
}

/// Result of registering or updating a class.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMutationResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
}

impl From<Outcome<i64>> for ClassMutationResponse {
    fn from(outcome: Outcome<i64>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            errors: outcome.errors,
            class_id: outcome.data,
        }
    }
}

/// Classes in one state.
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
    pub classes: Vec<ClassRecord>,
}

impl From<Outcome<Vec<ClassRecord>>> for ClassListResponse {
    fn from(outcome: Outcome<Vec<ClassRecord>>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            errors: outcome.errors,
            classes: outcome.data.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forum_mutation_response_success() {
        let response: ForumMutationResponse = Outcome::ok("creado", 12).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["forumId"], 12);
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn test_forum_mutation_response_failure_omits_id() {
        let response: ForumMutationResponse =
            Outcome::<i64>::store_failure("Error al crear foro", "disk full").into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Error al crear foro: disk full");
        assert_eq!(json["errors"], serde_json::json!(["disk full"]));
        assert!(json.get("forumId").is_none());
    }

    #[test]
    fn test_forum_list_response_failure_has_empty_posts() {
        let response: ForumListResponse = Outcome::<Vec<ForumPost>>::failure("nope").into();
        assert!(!response.success);
        assert!(response.posts.is_empty());
    }

    #[test]
    fn test_outcome_response_drops_payload() {
        let response: OutcomeResponse = Outcome::ok("ok", vec![1, 2, 3]).into();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["message"], "ok");
    }
}
