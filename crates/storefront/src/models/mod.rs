//! Domain models for the storefront.
//!
//! Every model is stored as a camelCase JSON record inside one of the
//! collections listed in [`crate::storage::keys`].

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{CartItem, CartLine};
pub use order::{CustomerInfo, NewOrder, Order, PaymentInfo};
pub use product::{NewProduct, Product, ProductPatch};
pub use session::Session;
pub use user::User;
