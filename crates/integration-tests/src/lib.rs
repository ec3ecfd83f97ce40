//! Integration tests for FloraLink.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p floralink-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Signup, login and session expiry
//! - `cart_flow` - Cart arithmetic against the catalogue
//! - `checkout_flow` - Orders placed from the cart
//! - `catalogue` - Product CRUD
//! - `routing` - Fragment router resolution and redirects
//! - `persistence` - File-backed profiles across reopen

use std::path::Path;

use floralink_core::{Category, Price};
use floralink_storefront::models::{NewProduct, Product};
use floralink_storefront::{Storefront, StorefrontConfig};

/// An empty in-memory storefront.
#[must_use]
pub fn empty_store() -> Storefront {
    Storefront::in_memory()
}

/// An in-memory storefront with the seed catalogue and accounts installed.
///
/// # Panics
///
/// Panics if seeding fails.
#[must_use]
pub fn seeded_store() -> Storefront {
    let app = Storefront::in_memory();
    app.install_seed().expect("seed data should install");
    app
}

/// Configuration for a file-backed profile at `path`, without seeding.
#[must_use]
pub fn file_config(path: &Path) -> StorefrontConfig {
    StorefrontConfig {
        data_file: path.to_path_buf(),
        seed: false,
        ..StorefrontConfig::default()
    }
}

/// A complete product form.
#[must_use]
pub fn product_form(name: &str, cents: i64, category: Category) -> NewProduct {
    NewProduct {
        name: Some(name.to_owned()),
        description: Some(format!("{name} description")),
        price: Price::from_cents(cents).ok(),
        image_url: Some(format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-"))),
        category: Some(category),
        featured: false,
    }
}

/// Create a product and return it.
///
/// # Panics
///
/// Panics if the form is rejected.
pub fn create_product(app: &Storefront, name: &str, cents: i64, category: Category) -> Product {
    app.products()
        .create(product_form(name, cents, category))
        .expect("complete product form should be accepted")
}
