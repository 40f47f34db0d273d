//! Request DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::validation::{no_control_chars, not_empty_trimmed, positive_role_ids};
use crate::classes::{ClassUpdate, NewClass};
use crate::forum::{ForumPostUpdate, NewForumPost, Visibility};

/// Forum post creation request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumRequest {
    /// Owning administrator.
    pub admin_id: i64,
    /// Title.
    #[validate(
        length(max = 200, message = "Must be at most 200 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    /// Body text.
    #[validate(
        length(max = 10000, message = "Must be at most 10000 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub description: String,
    /// Registration timestamp; the server clock is used when absent.
    #[serde(default)]
    pub registration_date: Option<DateTime<Utc>>,
    /// Public flag.
    pub is_public: bool,
    /// Roles that may see a private post. Ignored for public posts.
    #[serde(default)]
    #[validate(custom(function = "positive_role_ids"))]
    pub role_ids: Option<Vec<i64>>,
}

impl CreateForumRequest {
    /// Convert into the service input.
    pub fn into_new_post(self) -> NewForumPost {
        let mut post = NewForumPost::new(self.admin_id, self.title, self.description)
            .with_visibility(Visibility::from_flag(self.is_public, self.role_ids));
        if let Some(registered_at) = self.registration_date {
            post = post.with_registered_at(registered_at);
        }
        post
    }
}

/// Forum post update request. Replaces every field and the grant set.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumRequest {
    /// Post to update.
    pub forum_id: i64,
    /// Owning administrator after the update.
    pub admin_id: i64,
    #[validate(
        length(max = 200, message = "Must be at most 200 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    #[validate(
        length(max = 10000, message = "Must be at most 10000 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub description: String,
    pub is_public: bool,
    #[serde(default)]
    #[validate(custom(function = "positive_role_ids"))]
    pub role_ids: Option<Vec<i64>>,
}

impl UpdateForumRequest {
    /// Convert into the service input.
    pub fn into_update(self) -> ForumPostUpdate {
        ForumPostUpdate::new(self.forum_id, self.admin_id, self.title, self.description)
            .with_visibility(Visibility::from_flag(self.is_public, self.role_ids))
    }
}

/// Forum post deletion request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteForumRequest {
    /// Post to delete.
    pub forum_id: i64,
    /// Administrator claiming ownership.
    pub admin_id: i64,
}

/// Query for listing forum posts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListForumsQuery {
    /// Role whose visible posts are listed.
    pub role_id: i64,
}

/// Class registration request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClassRequest {
    #[validate(
        length(max = 200, message = "Must be at most 200 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub name: String,
    #[validate(custom(function = "not_empty_trimmed"))]
    pub modality: String,
    #[validate(
        length(max = 10000, message = "Must be at most 10000 characters"),
        custom(function = "no_control_chars")
    )]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl RegisterClassRequest {
    /// Convert into the service input.
    pub fn into_new_class(self) -> NewClass {
        NewClass {
            name: self.name,
            modality: self.modality,
            description: self.description,
            image: self.image,
        }
    }
}

/// Class update request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    /// Class to update.
    pub id: i64,
    #[validate(
        length(max = 200, message = "Must be at most 200 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub name: String,
    #[validate(custom(function = "not_empty_trimmed"))]
    pub modality: String,
    #[validate(
        length(max = 10000, message = "Must be at most 10000 characters"),
        custom(function = "no_control_chars")
    )]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl UpdateClassRequest {
    /// Split into the class ID and the service input.
    pub fn into_update(self) -> (i64, ClassUpdate) {
        (
            self.id,
            ClassUpdate {
                name: self.name,
                modality: self.modality,
                description: self.description,
                image: self.image,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_forum_request_camel_case() {
        let req: CreateForumRequest = serde_json::from_value(serde_json::json!({
            "adminId": 5,
            "title": "Avisos",
            "description": "Ensayo general",
            "registrationDate": "2025-03-01T09:30:00Z",
            "isPublic": false,
            "roleIds": [2, 3, 2]
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        let post = req.into_new_post();
        assert_eq!(post.admin_id, 5);
        assert_eq!(post.visibility, Visibility::Restricted(vec![2, 3]));
        assert_eq!(post.registered_at.to_rfc3339(), "2025-03-01T09:30:00+00:00");
    }

    #[test]
    fn test_create_forum_request_optional_fields() {
        let req: CreateForumRequest = serde_json::from_value(serde_json::json!({
            "adminId": 5,
            "title": "Avisos",
            "description": "...",
            "isPublic": true
        }))
        .unwrap();
        assert!(req.role_ids.is_none());
        assert!(req.registration_date.is_none());
        assert!(req.into_new_post().visibility.is_public());
    }

    #[test]
    fn test_create_forum_request_rejects_blank_title() {
        let req: CreateForumRequest = serde_json::from_value(serde_json::json!({
            "adminId": 5,
            "title": "   ",
            "description": "...",
            "isPublic": true
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_forum_request_rejects_bad_role_ids() {
        let req: CreateForumRequest = serde_json::from_value(serde_json::json!({
            "adminId": 5,
            "title": "Avisos",
            "description": "...",
            "isPublic": false,
            "roleIds": [0]
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_update_forum_request() {
        let req: UpdateForumRequest = serde_json::from_value(serde_json::json!({
            "forumId": 9,
            "adminId": 5,
            "title": "Avisos",
            "description": "...",
            "isPublic": true,
            "roleIds": [1]
        }))
        .unwrap();
        let update = req.into_update();
        assert_eq!(update.post_id, 9);
        assert!(update.visibility.grants().is_empty());
    }

    #[test]
    fn test_update_class_request() {
        let req: UpdateClassRequest = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Piano",
            "modality": "Presencial",
            "description": "Piano inicial"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        let (id, update) = req.into_update();
        assert_eq!(id, 4);
        assert!(update.image.is_none());
    }
}
