//! FloraLink storefront library.
//!
//! Catalogue, cart, orders and accounts persisted in a namespaced key-value
//! store, plus the hash-fragment router that drives page rendering. The
//! `floralink` CLI is a thin shell over this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;

pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use state::Storefront;
