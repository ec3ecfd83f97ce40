//! FloraLink Core - Shared types library.
//!
//! This crate provides common types used across all FloraLink components:
//! - `storefront` - Storage, domain managers, router and checkout
//! - `cli` - Command-line front end that drives the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, categories and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
