//! Unified error handling.
//!
//! Provides a unified `AppError` type for the storefront's outer surfaces.
//! Manager-level errors convert into it with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::seed::SeedError;
use crate::services::{AuthError, CheckoutError, ProductError};
use crate::storage::StorageOpenError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The data file could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageOpenError),

    /// Seed data could not be built.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Product validation failed.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated or lacks permission.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Message suitable for showing to the end user.
    ///
    /// Internal details (file paths, hashing failures) are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(_) | Self::Storage(_) | Self::Seed(_) => {
                "Internal error, see logs for details".to_owned()
            }
            Self::Auth(err) => err.user_message(),
            Self::Product(err) => err.to_string(),
            Self::Checkout(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
