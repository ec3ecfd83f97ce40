//! Catalogue commands.

use floralink_core::ProductId;
use floralink_storefront::models::{NewProduct, Product, ProductPatch};
use floralink_storefront::services::products::DEFAULT_FEATURED_LIMIT;
use floralink_storefront::{AppError, Result, Storefront};

use super::require_admin;

/// One-line summary of a product.
pub fn summary(product: &Product) -> String {
    let star = if product.featured { " *" } else { "" };
    format!(
        "{}  {}  {}  [{}]{star}",
        product.id, product.name, product.price, product.category
    )
}

/// List products, optionally filtered.
#[allow(clippy::print_stdout)]
pub fn list(app: &Storefront, category: Option<&str>, featured: bool) {
    let products = app.products();
    let mut items = match category {
        Some(category) => products.list_by_category(category),
        None if featured => products.list_featured(DEFAULT_FEATURED_LIMIT),
        None => products.list(),
    };
    if featured && category.is_some() {
        items.retain(|p| p.featured);
    }

    if items.is_empty() {
        println!("No products found");
        return;
    }
    for product in &items {
        println!("{}", summary(product));
    }
}

/// Show one product in full.
///
/// # Errors
///
/// Returns `AppError::NotFound` if there is no such product.
#[allow(clippy::print_stdout)]
pub fn show(app: &Storefront, id: &str) -> Result<()> {
    let product = app
        .products()
        .get_by_id(&ProductId::new(id))
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;

    println!("{}", product.name);
    println!("  ID:          {}", product.id);
    println!("  Price:       {}", product.price);
    println!("  Category:    {}", product.category);
    println!("  Featured:    {}", if product.featured { "yes" } else { "no" });
    println!("  Image:       {}", product.image_url);
    println!("  Updated:     {}", product.updated_at.format("%Y-%m-%d %H:%M"));
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    Ok(())
}

/// Create a product (admin only).
///
/// # Errors
///
/// Returns an error if the caller isn't an admin or required fields are missing.
#[allow(clippy::print_stdout)]
pub fn create(app: &Storefront, input: NewProduct) -> Result<()> {
    require_admin(app)?;
    let product = app.products().create(input)?;
    println!("Created {}", summary(&product));
    Ok(())
}

/// Apply a patch to a product (admin only).
///
/// # Errors
///
/// Returns an error if the caller isn't an admin, the patch is empty, or the
/// product doesn't exist.
#[allow(clippy::print_stdout)]
pub fn update(app: &Storefront, id: &str, patch: ProductPatch) -> Result<()> {
    require_admin(app)?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("Nothing to update".to_owned()));
    }
    let id = ProductId::new(id);
    if !app.products().update(&id, patch) {
        return Err(AppError::NotFound("Product".to_owned()));
    }
    println!("Updated product {id}");
    Ok(())
}

/// Delete a product (admin only).
///
/// # Errors
///
/// Returns an error if the caller isn't an admin or the product doesn't exist.
#[allow(clippy::print_stdout)]
pub fn delete(app: &Storefront, id: &str) -> Result<()> {
    require_admin(app)?;
    let id = ProductId::new(id);
    if !app.products().delete(&id) {
        return Err(AppError::NotFound("Product".to_owned()));
    }
    println!("Deleted product {id}");
    Ok(())
}
