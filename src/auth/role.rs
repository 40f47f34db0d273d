//! Academy roles.

use std::fmt;
use std::str::FromStr;

/// Identity category of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Academy administrator. Owns forum posts and the class catalogue.
    Administrator,
    /// Teaching staff.
    Professor,
    /// Enrolled student.
    Student,
}

impl Role {
    /// Role name as carried in access tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Professor => "Profesor",
            Role::Student => "Estudiante",
        }
    }

    /// Whether this role may mutate forum posts and classes.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "administrador" | "administrator" | "admin" => Ok(Role::Administrator),
            "profesor" | "professor" => Ok(Role::Professor),
            "estudiante" | "student" => Ok(Role::Student),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}
