//! Order payload

use serde::Serialize;
use thiserror::Error;

use crate::{cart::Cart, contact::ContactDetails, summary::format_money};

/// Errors from building an order payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The cart was empty. Checkout cannot be opened with an empty cart, so
    /// reaching this is a programming error, reported rather than submitted.
    #[error("Cannot build an order from an empty cart")]
    EmptyCart,
}

/// Submission-ready order data.
///
/// Serialized by the page into the URL-encoded form body expected by the
/// order endpoint: contact fields plus a textual product listing and a
/// formatted total. The endpoint consumes no structured body beyond this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    /// Customer name.
    pub name: String,

    /// Customer email address.
    pub email: String,

    /// Customer phone number.
    pub phone: String,

    /// Human-readable product listing, e.g. `2x Bread ($3.50 each)`.
    pub products: String,

    /// Formatted order total.
    pub total: String,
}

impl OrderPayload {
    /// Build the submission payload from the current cart and contact details.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart has no line items.
    pub fn build(cart: &Cart, contact: &ContactDetails) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let products = cart
            .iter()
            .map(|line| {
                format!(
                    "{}x {} ({} each)",
                    line.quantity(),
                    line.name(),
                    format_money(line.unit_price()),
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        Ok(OrderPayload {
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            products,
            total: format_money(&cart.subtotal()),
        })
    }
}
