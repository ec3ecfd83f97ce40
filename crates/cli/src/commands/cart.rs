//! Cart commands.

use floralink_core::ProductId;
use floralink_storefront::{AppError, Result, Storefront};

/// Show cart lines, item count and total.
#[allow(clippy::print_stdout)]
pub fn show(app: &Storefront) {
    let cart = app.cart();
    let lines = cart.list_with_details();
    if lines.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for line in &lines {
        println!(
            "{:>3} x {}  ({} each)  {}",
            line.item.quantity,
            line.product.name,
            line.product.price,
            line.subtotal()
        );
    }
    println!("Items: {}", cart.item_count());
    println!("Total: {}", cart.total());
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product doesn't exist.
#[allow(clippy::print_stdout)]
pub fn add(app: &Storefront, id: &str, quantity: u32) -> Result<()> {
    let id = ProductId::new(id);
    let product = app
        .products()
        .get_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;

    let cart = app.cart();
    cart.add_item(&id, quantity);
    println!("Added {} to cart ({} items)", product.name, cart.item_count());
    Ok(())
}

/// Set the quantity of a cart entry.
#[allow(clippy::print_stdout)]
pub fn update(app: &Storefront, id: &str, quantity: i64) {
    let cart = app.cart();
    cart.update_quantity(&ProductId::new(id), quantity);
    println!("Cart has {} items", cart.item_count());
}

/// Remove a product from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(app: &Storefront, id: &str) {
    let cart = app.cart();
    cart.remove_item(&ProductId::new(id));
    println!("Cart has {} items", cart.item_count());
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear(app: &Storefront) {
    app.cart().clear();
    println!("Cart cleared");
}
