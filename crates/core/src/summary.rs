//! Cart summary projection

use rusty_money::{Money, iso::Currency};

use crate::cart::Cart;

/// Formatted render model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Product name.
    pub name: String,

    /// Number of units.
    pub quantity: u32,

    /// Formatted unit price.
    pub unit_price: String,

    /// Formatted line total.
    pub line_total: String,
}

/// Render model projected from the current cart state.
///
/// Pure projection: every field is recomputed from the cart on each call,
/// nothing is cached. The page re-projects after every mutation and once at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Total number of units across all lines.
    pub unit_count: u32,

    /// Formatted cart total.
    pub total: String,

    /// Whether checkout may be opened (true iff the cart is non-empty).
    pub checkout_enabled: bool,

    /// One formatted row per line item, in insertion order.
    pub lines: Vec<SummaryLine>,
}

impl CartSummary {
    /// Project the current cart state into a render model.
    pub fn project(cart: &Cart) -> Self {
        let lines = cart
            .iter()
            .map(|line| SummaryLine {
                name: line.name().to_string(),
                quantity: line.quantity(),
                unit_price: format_money(line.unit_price()),
                line_total: format_money(&line.line_total()),
            })
            .collect();

        CartSummary {
            unit_count: cart.unit_count(),
            total: format_money(&cart.subtotal()),
            checkout_enabled: !cart.is_empty(),
            lines,
        }
    }
}

/// Format a monetary amount for display.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format!("{money}")
}
