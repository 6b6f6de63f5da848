//! Storefront Core
//!
//! Cart, checkout-flow and order-payload engine behind the storefront page.

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod fixtures;
pub mod order;
pub mod prelude;
pub mod summary;
