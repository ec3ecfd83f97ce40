//! Domain services.
//!
//! Each manager owns one collection in the store and borrows the
//! [`StorageService`](crate::storage::StorageService) it works on.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;

pub use auth::{AuthError, AuthManager};
pub use cart::CartManager;
pub use checkout::{CheckoutError, CheckoutRequest, CheckoutService, PaymentDetails};
pub use orders::OrderManager;
pub use products::{ProductError, ProductManager};
