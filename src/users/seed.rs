use time::macros::datetime;

use crate::users::repo_types::{Role, User};

/// The four accounts the demo directory starts with.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=2$abc123def456".into(),
            full_name: "System Administrator".into(),
            role: Role::Admin,
            created_at: datetime!(2024-01-15 10:30 UTC),
            updated_at: datetime!(2024-01-15 10:30 UTC),
        },
        User {
            id: 2,
            username: "jdoe".into(),
            email: "john.doe@example.com".into(),
            password_hash: "$bcrypt$2b$12$xyz789uvw012".into(),
            full_name: "John Doe".into(),
            role: Role::User,
            created_at: datetime!(2024-02-20 14:15 UTC),
            updated_at: datetime!(2024-02-22 09:45 UTC),
        },
        User {
            id: 3,
            username: "moderator1".into(),
            email: "mod@example.com".into(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=2$def456ghi789".into(),
            full_name: "Jane Smith".into(),
            role: Role::Moderator,
            created_at: datetime!(2024-03-10 11:20 UTC),
            updated_at: datetime!(2024-03-10 11:20 UTC),
        },
        User {
            id: 4,
            username: "testuser".into(),
            email: "test@example.com".into(),
            password_hash: "$bcrypt$2b$12$mno345pqr678".into(),
            full_name: "Test User".into(),
            role: Role::User,
            created_at: datetime!(2024-03-25 16:00 UTC),
            updated_at: datetime!(2024-03-25 16:00 UTC),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::users::services::is_valid_email;

    #[test]
    fn demo_users_satisfy_directory_invariants() {
        let users = demo_users();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        let usernames: HashSet<_> = users.iter().map(|u| u.username.as_str()).collect();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(ids.len(), users.len());
        assert_eq!(usernames.len(), users.len());
        assert_eq!(emails.len(), users.len());
        for u in &users {
            assert!(is_valid_email(&u.email), "{}", u.email);
            assert!(u.created_at <= u.updated_at);
        }
    }
}
