//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use floralink_core::{Email, UserId};

/// A storefront account.
///
/// Users are created by signup or seed data and are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across users.
    pub email: Email,
    /// Argon2id PHC string, or a legacy base-36 hash.
    pub password_hash: String,
    /// Whether the user can manage the catalogue.
    #[serde(default)]
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let user = User {
            id: UserId::new("u1"),
            name: "Jane".to_owned(),
            email: Email::parse("jane@x.com").unwrap(),
            password_hash: "abc".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["passwordHash"], "abc");
        assert_eq!(value["isAdmin"], false);
        assert!(value.get("createdAt").is_some());
    }
}
