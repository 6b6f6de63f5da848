//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "3.50 USD")
    pub price: String,
}

/// One sellable product loaded from the catalog fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    /// Stable fixture key, used to wire page actions to products.
    pub key: String,

    /// Display name. Also the cart line key, so it is unique per catalog.
    pub name: String,

    /// Unit price.
    pub price: Money<'static, Currency>,
}

/// The product catalog backing the page.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
    currency: &'static Currency,
}

impl Catalog {
    /// Products in display order.
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Currency shared by every product in the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Load catalog fixture content into the structure backing the page.
///
/// Products are sorted by display name. All products must share one
/// currency; the cart is created in that currency.
///
/// # Errors
///
/// Returns a [`FixtureError`] when the YAML cannot be parsed, a price is
/// malformed, currencies are inconsistent across products, or no products
/// are present.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut products: Vec<CatalogProduct> = Vec::new();
    let mut currency: Option<&'static Currency> = None;

    for (key, product) in fixture.products {
        let (minor_units, parsed_currency) = parse_price(&product.price)?;

        if let Some(existing) = currency
            && existing != parsed_currency
        {
            return Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                parsed_currency.iso_alpha_code.to_string(),
            ));
        }

        currency = Some(parsed_currency);

        products.push(CatalogProduct {
            key,
            name: product.name,
            price: Money::from_minor(minor_units, parsed_currency),
        });
    }

    products.sort_by(|left, right| left.name.cmp(&right.name));

    Ok(Catalog {
        products,
        currency: currency.ok_or(FixtureError::NoProducts)?,
    })
}

/// Parse price string (e.g., "3.50 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, if the amount is negative,
/// or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(format!(
            "Prices must be non-negative, got: {s}"
        )));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
