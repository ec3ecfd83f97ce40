//! Session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use floralink_core::UserId;

/// The logged-in state of the profile.
///
/// At most one session exists at a time, stored under
/// [`keys::SESSION`](crate::storage::keys::SESSION).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The logged-in user.
    pub user_id: UserId,
    /// Absolute expiry time.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is still valid at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_validity_boundary() {
        let now = Utc::now();
        let session = Session {
            user_id: UserId::new("u1"),
            expires_at: now,
        };
        assert!(!session.is_valid_at(now));
        assert!(session.is_valid_at(now - Duration::seconds(1)));
    }
}
