//! Password hashing.
//!
//! New credentials are hashed with Argon2id. Stored hashes that are not PHC
//! strings come from the legacy storefront, which used a 32-bit string hash
//! rendered in base 36; those still verify so old profiles can log in.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use super::AuthError;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate password meets requirements.
pub(crate) fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Please enter a password with at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check `password` against a stored hash of either format.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    if stored.starts_with('$') {
        let Ok(parsed_hash) = PasswordHash::new(stored) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };
        return Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();
    }

    legacy_hash(password) == stored
}

/// The legacy storefront's password hash.
///
/// `h = h * 31 + unit` over UTF-16 code units with 32-bit wraparound, printed
/// as a signed base-36 number. Trivially reversible; verification only.
#[must_use]
pub fn legacy_hash(input: &str) -> String {
    let hash = input.encode_utf16().fold(0_i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut n = value.unsigned_abs();
    if n == 0 {
        return "0".to_owned();
    }

    let mut out = Vec::new();
    while n > 0 {
        let digit = DIGITS.get((n % 36) as usize).copied().unwrap_or(b'0');
        out.push(digit);
        n /= 36;
    }
    if value < 0 {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_hash_known_values() {
        assert_eq!(legacy_hash(""), "0");
        // 'a' = 97 = 2 * 36 + 25
        assert_eq!(legacy_hash("a"), "2p");
        // "ab" = 97 * 31 + 98 = 3105
        assert_eq!(legacy_hash("ab"), "2e9");
    }

    #[test]
    fn test_legacy_hash_wraps_to_negative() {
        let hash = legacy_hash("password1-that-is-long-enough");
        assert!(!hash.is_empty());
        assert_eq!(hash, legacy_hash("password1-that-is-long-enough"));
    }

    #[test]
    fn test_legacy_hash_i32_min() {
        assert_eq!(to_base36(i32::MIN), "-zik0zk");
    }

    #[test]
    fn test_argon2_roundtrip() {
        let hash = hash_password("password1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("password1", &hash));
        assert!(!verify_password("password2", &hash));
    }

    #[test]
    fn test_argon2_is_salted() {
        assert_ne!(
            hash_password("password1").unwrap(),
            hash_password("password1").unwrap()
        );
    }

    #[test]
    fn test_verify_legacy() {
        let stored = legacy_hash("test1234");
        assert!(verify_password("test1234", &stored));
        assert!(!verify_password("test12345", &stored));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("12345678").is_ok());
    }
}
