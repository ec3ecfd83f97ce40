//! Authentication service.
//!
//! Provides password signup/login and the profile's single session.
//! Sessions expire lazily: an expired session is removed the first time
//! it is read.

mod error;
mod password;

pub use error::AuthError;
pub use password::{MIN_PASSWORD_LENGTH, legacy_hash};

use chrono::{Duration, Utc};

use floralink_core::{Email, UserId};

use crate::models::{Session, User};
use crate::storage::{StorageService, keys};

pub(crate) use password::hash_password;
use password::{validate_password, verify_password};

/// Default session lifetime.
pub const DEFAULT_SESSION_TTL_HOURS: u32 = 24;

/// Authentication service.
///
/// Handles user registration, login and session lifecycle.
pub struct AuthManager<'a> {
    storage: &'a StorageService,
    session_ttl: Duration,
}

impl<'a> AuthManager<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a StorageService, session_ttl: Duration) -> Self {
        Self {
            storage,
            session_ttl,
        }
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Register a new user and log them in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        // Validate email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        let mut users = self.all_users();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            password_hash: hash_password(password)?,
            is_admin: false,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.storage.set(keys::USERS, &users);
        tracing::info!(user_id = %user.id, email = %user.email, "User signed up");

        self.create_session(&user.id);
        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no user has that email or
    /// the password doesn't match.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .all_users()
            .into_iter()
            .find(|u| u.email.as_str() == email && verify_password(password, &u.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        self.create_session(&user.id);
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// End the current session, if any.
    pub fn logout(&self) {
        self.storage.remove(keys::SESSION);
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The logged-in user.
    ///
    /// Returns `None` without a session, when the session has expired (the
    /// session is removed), or when its user no longer exists.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let session: Session = self.storage.get(keys::SESSION)?;

        if !session.is_valid_at(Utc::now()) {
            tracing::debug!(user_id = %session.user_id, "Session expired");
            self.logout();
            return None;
        }

        self.all_users()
            .into_iter()
            .find(|u| u.id == session.user_id)
    }

    /// Whether someone is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Whether the logged-in user is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|u| u.is_admin)
    }

    /// All registered users.
    #[must_use]
    pub fn all_users(&self) -> Vec<User> {
        self.storage.get_list(keys::USERS)
    }

    fn create_session(&self, user_id: &UserId) {
        let session = Session {
            user_id: user_id.clone(),
            expires_at: Utc::now() + self.session_ttl,
        };
        self.storage.set(keys::SESSION, &session);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn auth(storage: &StorageService) -> AuthManager<'_> {
        AuthManager::new(storage, Duration::hours(i64::from(DEFAULT_SESSION_TTL_HOURS)))
    }

    #[test]
    fn test_signup_creates_user_and_session() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);

        let user = auth.signup("Jane", "jane@x.com", "password1").unwrap();

        assert!(!user.is_admin);
        assert_eq!(user.name, "Jane");
        assert_eq!(auth.current_user(), Some(user.clone()));
        assert!(auth.is_authenticated());
        assert!(!auth.is_admin());

        let session: Session = storage.get(keys::SESSION).unwrap();
        assert_eq!(session.user_id, user.id);
        assert!(session.expires_at > Utc::now() + Duration::hours(23));
    }

    #[test]
    fn test_signup_validation() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);

        assert!(matches!(
            auth.signup("Jane", "not-an-email", "password1"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.signup("Jane", "jane@x.com", "short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(auth.all_users().is_empty());
        assert!(!storage.exists(keys::SESSION));
    }

    #[test]
    fn test_signup_duplicate_email_keeps_session() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);
        let jane = auth.signup("Jane", "jane@x.com", "password1").unwrap();

        let err = auth.signup("Other", "jane@x.com", "password2").unwrap_err();

        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(auth.all_users().len(), 1);
        assert_eq!(auth.current_user().unwrap().id, jane.id);
    }

    #[test]
    fn test_login_and_logout() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);
        let jane = auth.signup("Jane", "jane@x.com", "password1").unwrap();
        auth.logout();
        assert!(auth.current_user().is_none());

        assert!(matches!(
            auth.login("jane@x.com", "wrong-password"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody@x.com", "password1"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(!auth.is_authenticated());

        let user = auth.login("jane@x.com", "password1").unwrap();
        assert_eq!(user.id, jane.id);
        assert!(auth.is_authenticated());

        auth.logout();
        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_accepts_legacy_hash() {
        let storage = StorageService::in_memory();
        let legacy_user = User {
            id: UserId::new("legacy"),
            name: "Test User".to_owned(),
            email: Email::parse("test@floralink.com").unwrap(),
            password_hash: legacy_hash("test1234"),
            is_admin: true,
            created_at: Utc::now(),
        };
        storage.set(keys::USERS, &[legacy_user]);
        let auth = auth(&storage);

        assert!(auth.login("test@floralink.com", "test1234").is_ok());
        assert!(auth.is_admin());
    }

    #[test]
    fn test_expired_session_is_removed_lazily() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);
        let jane = auth.signup("Jane", "jane@x.com", "password1").unwrap();
        storage.set(
            keys::SESSION,
            &Session {
                user_id: jane.id,
                expires_at: Utc::now() - Duration::minutes(1),
            },
        );

        assert!(auth.current_user().is_none());
        assert!(!storage.exists(keys::SESSION));
        // Second read is a no-op.
        assert!(auth.current_user().is_none());
        assert!(!storage.exists(keys::SESSION));
    }

    #[test]
    fn test_session_for_missing_user() {
        let storage = StorageService::in_memory();
        let auth = auth(&storage);
        storage.set(
            keys::SESSION,
            &Session {
                user_id: UserId::new("ghost"),
                expires_at: Utc::now() + Duration::hours(1),
            },
        );

        assert!(auth.current_user().is_none());
        assert!(!auth.is_admin());
    }
}
