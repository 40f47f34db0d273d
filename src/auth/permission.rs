//! Permission checking.
//!
//! Mutations of forum posts and classes are reserved to administrators.
//! Listing forum posts is open to every authenticated role, but only for the
//! caller's own role id unless the caller is an administrator.

use thiserror::Error;

use super::Role;

/// Permission-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Caller's role is not allowed to perform the operation.
    #[error("esta operación requiere el rol {0}")]
    InsufficientRole(String),

    /// Caller asked for posts visible to a role other than their own.
    #[error("no puede consultar foros de otro rol")]
    ForeignRole,

    /// Caller named an administrator id other than their own.
    #[error("no puede actuar en nombre de otro administrador")]
    ForeignAdministrator,
}

/// Require the administrator role.
///
/// # Examples
///
/// ```
/// use acedema::auth::{require_administrator, Role};
///
/// assert!(require_administrator(Role::Administrator).is_ok());
/// assert!(require_administrator(Role::Student).is_err());
/// ```
pub fn require_administrator(role: Role) -> Result<(), PermissionError> {
    if role.is_administrator() {
        Ok(())
    } else {
        Err(PermissionError::InsufficientRole(
            Role::Administrator.as_str().to_string(),
        ))
    }
}

/// Check whether a caller may list the posts visible to `requested_role_id`.
pub fn can_list_for_role(
    role: Role,
    own_role_id: i64,
    requested_role_id: i64,
) -> Result<(), PermissionError> {
    if role.is_administrator() || own_role_id == requested_role_id {
        Ok(())
    } else {
        Err(PermissionError::ForeignRole)
    }
}

/// Require that the administrator id named in a request is the caller's own.
pub fn require_same_administrator(caller_id: i64, admin_id: i64) -> Result<(), PermissionError> {
    if caller_id == admin_id {
        Ok(())
    } else {
        Err(PermissionError::ForeignAdministrator)
    }
}
