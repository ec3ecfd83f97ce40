//! Account commands.

use floralink_storefront::{Result, Storefront};

/// Create an account and log in.
///
/// # Errors
///
/// Returns an error if the email is invalid or taken, or the password is weak.
#[allow(clippy::print_stdout)]
pub fn signup(app: &Storefront, name: &str, email: &str, password: &str) -> Result<()> {
    let user = app.auth().signup(name, email, password)?;
    println!("Welcome, {}! You are now logged in.", user.name);
    Ok(())
}

/// Log in.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on a wrong email or password.
#[allow(clippy::print_stdout)]
pub fn login(app: &Storefront, email: &str, password: &str) -> Result<()> {
    let user = app.auth().login(email, password)?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

/// Log out.
#[allow(clippy::print_stdout)]
pub fn logout(app: &Storefront) {
    app.auth().logout();
    println!("Logged out");
}

/// Show the logged-in user.
#[allow(clippy::print_stdout)]
pub fn whoami(app: &Storefront) {
    match app.auth().current_user() {
        Some(user) => {
            let role = if user.is_admin { " (admin)" } else { "" };
            println!("{} <{}>{role}", user.name, user.email);
        }
        None => println!("Not logged in"),
    }
}
