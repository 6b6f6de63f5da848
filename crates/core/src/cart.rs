//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A mutation referenced a product name with no line item in the cart.
    #[error("No line item named {0:?} in the cart")]
    UnknownItem(String),

    /// An item's currency differs from the cart currency (item currency, cart currency).
    #[error("Item has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    name: String,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl LineItem {
    /// Product name, unique within the cart.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price for a single unit.
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Number of units. Always at least 1; a line that would drop to zero is
    /// removed from the cart instead.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price for the whole line: unit price times quantity.
    pub fn line_total(&self) -> Money<'static, Currency> {
        let minor = self
            .unit_price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity));

        Money::from_minor(minor, self.unit_price.currency())
    }
}

/// The ordered collection of line items for the current page session.
///
/// Insertion order is preserved and each distinct product name has at most
/// one line. The cart is created empty, mutated only by user-triggered
/// actions, and never outlives the page session.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same name exists its quantity is incremented,
    /// otherwise a new line is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the price is not in the
    /// cart currency. The cart is left unchanged.
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Money<'static, Currency>,
    ) -> Result<(), CartError> {
        if unit_price.currency() != self.currency {
            return Err(CartError::CurrencyMismatch(
                unit_price.currency().iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(());
        }

        self.items.push(LineItem {
            name: name.to_string(),
            unit_price,
            quantity: 1,
        });

        Ok(())
    }

    /// Adjust the quantity of the named line by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line entirely; the
    /// cart never stores a zero or negative quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no line has that name. The cart
    /// is left unchanged.
    pub fn change_quantity(&mut self, name: &str, delta: i32) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| CartError::UnknownItem(name.to_string()))?;

        let Some(line) = self.items.get_mut(position) else {
            return Err(CartError::UnknownItem(name.to_string()));
        };

        let updated = i64::from(line.quantity) + i64::from(delta);

        if updated <= 0 {
            self.items.remove(position);
        } else {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }

        Ok(())
    }

    /// Remove the named line unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no line has that name. The cart
    /// is left unchanged.
    pub fn remove_item(&mut self, name: &str) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| CartError::UnknownItem(name.to_string()))?;

        self.items.remove(position);

        Ok(())
    }

    /// Empty the cart. Invoked after a confirmed successful submission.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Calculate the cart total, recomputed from the lines on every call.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        let minor = self
            .items
            .iter()
            .fold(0_i64, |total, line| {
                total.saturating_add(line.line_total().to_minor_units())
            });

        Money::from_minor(minor, self.currency)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
