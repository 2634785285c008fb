use std::{collections::BTreeMap, fmt, sync::Arc};

use tracing::debug;

use crate::{
    clock::Clock,
    users::{
        password::PasswordHasher,
        repo_types::{DirectoryError, NewUser, User, UserChanges},
        services::{validate_changes, validate_new_user},
    },
};

/// In-memory user directory.
///
/// Ids are handed out in increasing order and never reused, so iterating the
/// map yields users in insertion order. Every mutation validates fully before
/// it touches the map: a failed call leaves the directory unchanged.
pub struct UserDirectoryStore {
    users: BTreeMap<u64, User>,
    next_id: u64,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for UserDirectoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDirectoryStore")
            .field("users", &self.users.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl UserDirectoryStore {
    pub fn new(hasher: Arc<dyn PasswordHasher>, clock: Arc<dyn Clock>) -> Self {
        Self::with_users(Vec::new(), hasher, clock)
    }

    /// Pre-loads `users`; the id counter starts above the highest one.
    pub fn with_users(
        users: Vec<User>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let users: BTreeMap<u64, User> = users.into_iter().map(|u| (u.id, u)).collect();
        let next_id = users.keys().next_back().map_or(1, |max| max + 1);
        Self {
            users,
            next_id,
            hasher,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn list(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: u64) -> Result<User, DirectoryError> {
        self.users.get(&id).cloned().ok_or(DirectoryError::NotFound(id))
    }

    pub fn create(&mut self, input: &NewUser) -> Result<User, DirectoryError> {
        let valid = validate_new_user(input)?;
        self.ensure_unique(Some(valid.username.as_str()), Some(valid.email.as_str()), None)?;

        let id = self.next_id;
        let now = self.clock.now();
        let user = User {
            id,
            username: valid.username,
            email: valid.email,
            password_hash: self.hasher.hash(valid.password),
            full_name: valid.full_name,
            role: valid.role,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.users.insert(id, user.clone());
        debug!(user_id = id, next_id = self.next_id, "user inserted");
        Ok(user)
    }

    pub fn update(&mut self, id: u64, changes: &UserChanges) -> Result<User, DirectoryError> {
        if !self.users.contains_key(&id) {
            return Err(DirectoryError::NotFound(id));
        }
        let valid = validate_changes(changes)?;
        self.ensure_unique(valid.username.as_deref(), valid.email.as_deref(), Some(id))?;

        let password_hash = valid.password.map(|raw| self.hasher.hash(raw));
        let now = self.clock.now();
        let user = self
            .users
            .get_mut(&id)
            .ok_or(DirectoryError::NotFound(id))?;

        if let Some(username) = valid.username {
            user.username = username;
        }
        if let Some(email) = valid.email {
            user.email = email;
        }
        if let Some(full_name) = valid.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = valid.role {
            user.role = role;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = now.max(user.created_at);
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<User, DirectoryError> {
        self.users.remove(&id).ok_or(DirectoryError::NotFound(id))
    }

    fn ensure_unique(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        exclude: Option<u64>,
    ) -> Result<(), DirectoryError> {
        let mut others = self.users.values().filter(|u| Some(u.id) != exclude);
        if let Some(username) = username {
            if others.clone().any(|u| u.username == username) {
                return Err(DirectoryError::DuplicateUsername);
            }
        }
        if let Some(email) = email {
            if others.any(|u| u.email == email) {
                return Err(DirectoryError::DuplicateEmail);
            }
        }
        Ok(())
    }
}
