use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            "user" => Ok(Role::User),
            _ => Err(DirectoryError::Validation("Invalid role".into())),
        }
    }
}

/// User record held by the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,                       // assigned by the store, never reused
    pub username: String,              // unique, case-sensitive
    pub email: String,                 // unique, case-sensitive
    pub password_hash: String,         // placeholder hash, never the raw password
    pub full_name: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Raw input for a new user, as submitted by a form or request body.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// Fields to replace on an existing user. `None` keeps the current value;
/// an empty password also keeps the current hash.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("{0}")]
    Validation(String),
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("User not found")]
    NotFound(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn role_parses_only_known_values() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("moderator".parse::<Role>(), Ok(Role::Moderator));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(DirectoryError::Validation("Invalid role".into()))
        );
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn role_display_round_trips_through_parse() {
        for role in [Role::Admin, Role::Moderator, Role::User] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert_eq!(Role::Moderator.to_string(), "moderator");
    }

    #[test]
    fn user_serializes_with_camel_case_keys() {
        let user = User {
            id: 7,
            username: "jdoe".into(),
            email: "john@x.com".into(),
            password_hash: "$bcrypt$2b$12$abcdefghijkl".into(),
            full_name: "John Doe".into(),
            role: Role::Moderator,
            created_at: datetime!(2024-02-20 14:15 UTC),
            updated_at: datetime!(2024-02-22 09:45 UTC),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fullName"], "John Doe");
        assert_eq!(json["passwordHash"], "$bcrypt$2b$12$abcdefghijkl");
        assert_eq!(json["role"], "moderator");
        assert_eq!(json["createdAt"], "2024-02-20T14:15:00Z");
        assert_eq!(json["updatedAt"], "2024-02-22T09:45:00Z");
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(DirectoryError::DuplicateUsername.to_string(), "Username already exists");
        assert_eq!(DirectoryError::DuplicateEmail.to_string(), "Email already exists");
        assert_eq!(DirectoryError::NotFound(999).to_string(), "User not found");
        assert_eq!(
            DirectoryError::Validation("Invalid email".into()).to_string(),
            "Invalid email"
        );
    }
}
