//! Forum post model.
//!
//! A post is either public or restricted to an explicit set of role ids.
//! Restricted posts own one grant row per role in `foro_roles`; public posts
//! own none.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Visibility of a forum post.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Visible to every role. Never carries grants.
    #[default]
    Public,
    /// Visible only to the listed roles (and its administrator).
    /// An empty list means nobody else can see it.
    Restricted(Vec<i64>),
}

impl Visibility {
    /// Build the visibility from the request flag and role list.
    ///
    /// Role ids are ignored for public posts and de-duplicated (first
    /// occurrence wins) for restricted ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use acedema::forum::Visibility;
    ///
    /// assert_eq!(Visibility::from_flag(true, Some(vec![1, 2])), Visibility::Public);
    /// assert_eq!(
    ///     Visibility::from_flag(false, Some(vec![2, 3, 2])),
    ///     Visibility::Restricted(vec![2, 3])
    /// );
    /// ```
    pub fn from_flag(is_public: bool, role_ids: Option<Vec<i64>>) -> Self {
        if is_public {
            return Visibility::Public;
        }

        let mut unique = Vec::new();
        for role_id in role_ids.unwrap_or_default() {
            if !unique.contains(&role_id) {
                unique.push(role_id);
            }
        }
        Visibility::Restricted(unique)
    }

    /// Whether the post is public.
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }

    /// Role ids that must hold a grant row for this post.
    pub fn grants(&self) -> &[i64] {
        match self {
            Visibility::Public => &[],
            Visibility::Restricted(roles) => roles,
        }
    }
}

/// Forum post as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    /// Store-assigned post id.
    pub id: i64,
    /// Administrator who owns the post.
    pub admin_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Registration timestamp given at creation.
    pub registered_at: DateTime<Utc>,
    /// Set by the server on every mutation.
    pub last_modified_at: DateTime<Utc>,
    /// Public flag.
    pub is_public: bool,
}

/// Data for creating a new forum post.
#[derive(Debug, Clone)]
pub struct NewForumPost {
    /// Owning administrator.
    pub admin_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
    /// Public or restricted to roles.
    pub visibility: Visibility,
}

impl NewForumPost {
    /// Create a public post registered now.
    pub fn new(admin_id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            admin_id,
            title: title.into(),
            description: description.into(),
            registered_at: Utc::now(),
            visibility: Visibility::Public,
        }
    }

    /// Set the registration timestamp.
    pub fn with_registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Full replacement of a post's fields and grant set.
#[derive(Debug, Clone)]
pub struct ForumPostUpdate {
    /// Post to update.
    pub post_id: i64,
    /// New owning administrator.
    pub admin_id: i64,
    /// New title.
    pub title: String,
    /// New body text.
    pub description: String,
    /// New visibility; the grant set is replaced wholesale.
    pub visibility: Visibility,
}

impl ForumPostUpdate {
    /// Create an update that makes the post public.
    pub fn new(
        post_id: i64,
        admin_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            admin_id,
            title: title.into(),
            description: description.into(),
            visibility: Visibility::Public,
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Internal struct for mapping database rows to ForumPost.
#[derive(sqlx::FromRow)]
pub(crate) struct ForumRow {
    id_foro: i64,
    id_administrador: i64,
    titulo: String,
    descripcion: String,
    fecha_registro: NaiveDateTime,
    fechaultimamodificacion: NaiveDateTime,
    espublico: bool,
}

impl ForumRow {
    pub(crate) fn into_post(self) -> ForumPost {
        ForumPost {
            id: self.id_foro,
            admin_id: self.id_administrador,
            title: self.titulo,
            description: self.descripcion,
            registered_at: self.fecha_registro.and_utc(),
            last_modified_at: self.fechaultimamodificacion.and_utc(),
            is_public: self.espublico,
        }
    }
}
