//! Role model and permission checks.
//!
//! Token issuance lives outside this service; requests arrive with a verified
//! role name and role id, and these helpers decide what that role may do.

pub mod permission;
pub mod role;

pub use permission::{
    can_list_for_role, require_administrator, require_same_administrator, PermissionError,
};
pub use role::Role;
