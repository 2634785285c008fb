use lazy_static::lazy_static;
use regex::Regex;

use crate::users::repo_types::{DirectoryError, NewUser, Role, UserChanges};

pub const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// New-user input after every field rule has passed.
#[derive(Debug)]
pub(crate) struct ValidNewUser<'a> {
    pub username: String,
    pub email: String,
    pub password: &'a str,
    pub full_name: String,
    pub role: Role,
}

/// Changes after every supplied field has passed. `password` is only set
/// when a non-empty replacement was given.
#[derive(Debug, Default)]
pub(crate) struct ValidChanges<'a> {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub password: Option<&'a str>,
}

fn required(value: &str, message: &str) -> Result<String, DirectoryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DirectoryError::Validation(message.into()));
    }
    Ok(value.to_string())
}

fn username(value: &str) -> Result<String, DirectoryError> {
    required(value, "Username is required")
}

fn email(value: &str) -> Result<String, DirectoryError> {
    let email = required(value, "Email is required")?;
    if !is_valid_email(&email) {
        return Err(DirectoryError::Validation("Invalid email".into()));
    }
    Ok(email)
}

fn full_name(value: &str) -> Result<String, DirectoryError> {
    required(value, "Full name is required")
}

fn password(value: &str) -> Result<&str, DirectoryError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(DirectoryError::Validation("Password too short".into()));
    }
    Ok(value)
}

pub(crate) fn validate_new_user(input: &NewUser) -> Result<ValidNewUser<'_>, DirectoryError> {
    Ok(ValidNewUser {
        username: username(&input.username)?,
        email: email(&input.email)?,
        password: password(&input.password)?,
        full_name: full_name(&input.full_name)?,
        role: input.role.trim().parse()?,
    })
}

pub(crate) fn validate_changes(changes: &UserChanges) -> Result<ValidChanges<'_>, DirectoryError> {
    Ok(ValidChanges {
        username: changes.username.as_deref().map(username).transpose()?,
        email: changes.email.as_deref().map(email).transpose()?,
        password: changes
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(password)
            .transpose()?,
        full_name: changes.full_name.as_deref().map(full_name).transpose()?,
        role: changes
            .role
            .as_deref()
            .map(|r| r.trim().parse::<Role>())
            .transpose()?,
    })
}
