//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, LineItem},
    checkout::{CheckoutFlow, CheckoutStage},
    contact::{ContactDetails, ContactError},
    fixtures::{Catalog, CatalogProduct, FixtureError, load_catalog},
    order::{OrderError, OrderPayload},
    summary::{CartSummary, SummaryLine, format_money},
};
