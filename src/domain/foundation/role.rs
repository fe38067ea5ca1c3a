//! Role enum for the three kinds of platform users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Platform role; determines which dashboard variant a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Professor,
    #[default]
    Student,
}

impl Role {
    /// Returns true for the administrator role.
    ///
    /// Only administrators may self-register; everyone else must be added
    /// to the platform by an administrator.
    pub fn can_self_register(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// All roles, in dashboard ordering.
    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Professor, Role::Student]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::Professor => "professor",
            Role::Student => "student",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "professor" => Ok(Role::Professor),
            "student" => Ok(Role::Student),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_student() {
        assert_eq!(Role::default(), Role::Student);
    }

    #[test]
    fn only_admin_can_self_register() {
        assert!(Role::Admin.can_self_register());
        assert!(!Role::Professor.can_self_register());
        assert!(!Role::Student.can_self_register());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("PROFESSOR".parse::<Role>().unwrap(), Role::Professor);
        assert_eq!(" student ".parse::<Role>().unwrap(), Role::Student);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("dean".parse::<Role>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for role in Role::all() {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
