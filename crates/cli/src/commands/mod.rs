//! CLI command implementations.

pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod store;

use floralink_storefront::{AppError, Result, Storefront};

/// Print the user-facing message for a failed command.
#[allow(clippy::print_stderr)]
pub fn report_error(error: &AppError) {
    eprintln!("error: {}", error.user_message());
}

/// Fail unless an admin is logged in.
pub fn require_admin(app: &Storefront) -> Result<()> {
    if app.auth().is_admin() {
        Ok(())
    } else {
        Err(AppError::Unauthorized(
            "Admin access required. Log in with an admin account.".to_owned(),
        ))
    }
}
