//! Checkout: turns the cart into an order.

use thiserror::Error;

use floralink_core::PaymentMethod;

use super::auth::AuthManager;
use super::cart::CartManager;
use super::orders::OrderManager;
use crate::models::{CustomerInfo, NewOrder, Order, PaymentInfo};

/// Errors that can occur when placing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nobody is logged in.
    #[error("please log in to check out")]
    NotAuthenticated,

    /// The cart has no purchasable items.
    #[error("your cart is empty")]
    EmptyCart,

    /// The chosen payment method needs details that weren't given.
    #[error("missing payment details: {0}")]
    MissingPaymentDetails(&'static str),
}

/// Payment as entered on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    /// Card payment; only the last four digits are stored.
    Card { card_number: String },
    /// GCash payment confirmed by an uploaded screenshot.
    Gcash { screenshot_name: String },
}

impl PaymentDetails {
    fn into_info(self) -> Result<PaymentInfo, CheckoutError> {
        match self {
            Self::Card { card_number } => {
                let digits: Vec<char> = card_number.chars().filter(|c| !c.is_whitespace()).collect();
                if digits.is_empty() {
                    return Err(CheckoutError::MissingPaymentDetails("card number"));
                }
                let skip = digits.len().saturating_sub(4);
                let last4: String = digits.into_iter().skip(skip).collect();
                Ok(PaymentInfo {
                    method: PaymentMethod::Card,
                    card_last4: Some(last4),
                    screenshot_name: None,
                })
            }
            Self::Gcash { screenshot_name } => {
                if screenshot_name.trim().is_empty() {
                    return Err(CheckoutError::MissingPaymentDetails("payment screenshot"));
                }
                Ok(PaymentInfo {
                    method: PaymentMethod::Gcash,
                    card_last4: None,
                    screenshot_name: Some(screenshot_name),
                })
            }
        }
    }
}

/// Checkout form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub customer: CustomerInfo,
    pub payment: PaymentDetails,
}

/// Places orders from the current cart.
pub struct CheckoutService<'a> {
    auth: AuthManager<'a>,
    cart: CartManager<'a>,
    orders: OrderManager<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service from the managers it coordinates.
    #[must_use]
    pub const fn new(auth: AuthManager<'a>, cart: CartManager<'a>, orders: OrderManager<'a>) -> Self {
        Self { auth, cart, orders }
    }

    /// Place an order for the logged-in user and empty the cart.
    ///
    /// The order stores the raw cart entries and the cart total at this
    /// moment.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::NotAuthenticated` without a valid session,
    /// `CheckoutError::EmptyCart` if no cart entry resolves to a product, and
    /// `CheckoutError::MissingPaymentDetails` if the payment is incomplete.
    pub fn place_order(&self, request: CheckoutRequest) -> Result<Order, CheckoutError> {
        let user = self
            .auth
            .current_user()
            .ok_or(CheckoutError::NotAuthenticated)?;

        if self.cart.list_with_details().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let payment_info = request.payment.into_info()?;

        let order = self.orders.create(NewOrder {
            user_id: Some(user.id),
            items: self.cart.items(),
            total: self.cart.total(),
            customer_info: request.customer,
            payment_info,
        });

        self.cart.clear();
        Ok(order)
    }
}
