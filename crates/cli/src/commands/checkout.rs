//! Checkout command.

use floralink_core::PaymentMethod;
use floralink_storefront::models::CustomerInfo;
use floralink_storefront::services::{CheckoutRequest, PaymentDetails};
use floralink_storefront::{Result, Storefront};

/// Checkout form values from the command line.
pub struct CheckoutArgs {
    pub full_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub method: PaymentMethod,
    pub card_number: Option<String>,
    pub gcash_screenshot: Option<String>,
}

impl CheckoutArgs {
    fn into_request(self) -> CheckoutRequest {
        let payment = match self.method {
            PaymentMethod::Card => PaymentDetails::Card {
                card_number: self.card_number.unwrap_or_default(),
            },
            PaymentMethod::Gcash => PaymentDetails::Gcash {
                screenshot_name: self.gcash_screenshot.unwrap_or_default(),
            },
        };
        CheckoutRequest {
            customer: CustomerInfo {
                full_name: self.full_name,
                phone: self.phone,
                delivery_address: self.delivery_address,
            },
            payment,
        }
    }
}

/// Place an order for the current cart.
///
/// # Errors
///
/// Returns a `CheckoutError` if nobody is logged in, the cart is empty, or
/// payment details are missing.
#[allow(clippy::print_stdout)]
pub fn place_order(app: &Storefront, args: CheckoutArgs) -> Result<()> {
    let order = app.checkout().place_order(args.into_request())?;

    println!("Order placed! Order ID: {}", order.id);
    println!("Total: {}", order.total);
    println!("Status: {}", order.status);
    Ok(())
}
