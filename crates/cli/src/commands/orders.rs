//! Order history commands.

use floralink_core::OrderId;
use floralink_storefront::models::Order;
use floralink_storefront::{AppError, Result, Storefront};

use super::require_admin;

fn summary(order: &Order) -> String {
    format!(
        "{}  {}  {}  {} items  [{}]",
        order.id,
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.total,
        order.items.iter().map(|i| u64::from(i.quantity)).sum::<u64>(),
        order.status
    )
}

/// List orders: every order for admins, the user's own otherwise.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if nobody is logged in.
#[allow(clippy::print_stdout)]
pub fn list(app: &Storefront) -> Result<()> {
    let user = app
        .auth()
        .current_user()
        .ok_or_else(|| AppError::Unauthorized("Please log in to see your orders".to_owned()))?;

    let orders = if user.is_admin {
        app.orders().list()
    } else {
        app.orders().list_by_user(&user.id)
    };

    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }
    for order in &orders {
        println!("{}", summary(order));
    }
    Ok(())
}

/// Show one order.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the order doesn't exist or belongs to
/// someone else (admins can see every order).
#[allow(clippy::print_stdout)]
pub fn show(app: &Storefront, id: &str) -> Result<()> {
    let user = app
        .auth()
        .current_user()
        .ok_or_else(|| AppError::Unauthorized("Please log in to see your orders".to_owned()))?;

    let order = app
        .orders()
        .get_by_id(&OrderId::new(id))
        .filter(|o| user.is_admin || o.user_id.as_ref() == Some(&user.id))
        .ok_or_else(|| AppError::NotFound("Order".to_owned()))?;

    println!("{}", summary(&order));
    println!("  Deliver to:  {}", order.customer_info.full_name);
    println!("  Phone:       {}", order.customer_info.phone);
    println!("  Address:     {}", order.customer_info.delivery_address);
    match (&order.payment_info.card_last4, &order.payment_info.screenshot_name) {
        (Some(last4), _) => println!("  Payment:     {} ending {last4}", order.payment_info.method),
        (None, Some(screenshot)) => {
            println!("  Payment:     {} ({screenshot})", order.payment_info.method);
        }
        (None, None) => println!("  Payment:     {}", order.payment_info.method),
    }

    let products = app.products();
    for item in &order.items {
        let name = products
            .get_by_id(&item.product_id)
            .map_or_else(|| format!("(removed product {})", item.product_id), |p| p.name);
        println!("  {:>3} x {name}", item.quantity);
    }
    Ok(())
}

/// Change an order's status (admin only).
///
/// # Errors
///
/// Returns an error if the caller isn't an admin or the order doesn't exist.
#[allow(clippy::print_stdout)]
pub fn set_status(app: &Storefront, id: &str, status: &str) -> Result<()> {
    require_admin(app)?;
    let id = OrderId::new(id);
    if !app.orders().update_status(&id, status) {
        return Err(AppError::NotFound("Order".to_owned()));
    }
    println!("Order {id} is now {status}");
    Ok(())
}
