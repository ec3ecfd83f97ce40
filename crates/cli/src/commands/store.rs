//! Data file management: seeding and reset.

use floralink_storefront::{Result, Storefront};

/// Install seed data if the catalogue is empty.
///
/// # Errors
///
/// Returns an error if a seed account can't be built.
#[allow(clippy::print_stdout)]
pub fn seed(app: &Storefront) -> Result<()> {
    if app.install_seed()? {
        println!(
            "Seeded {} products and {} users",
            app.products().list().len(),
            app.auth().all_users().len()
        );
    } else {
        println!("Catalogue already has products, nothing to do");
    }
    Ok(())
}

/// Delete all storefront data in the configured namespace.
#[allow(clippy::print_stdout)]
pub fn reset(app: &Storefront) {
    app.reset();
    println!("Cleared all data in namespace '{}'", app.storage().namespace());
}
