//! Fixtures
//!
//! The product catalog shown on the page is data, not code: a YAML fixture
//! parsed into a [`Catalog`] at startup.

use thiserror::Error;

pub mod products;

pub use products::{Catalog, CatalogProduct, load_catalog};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products defined in the fixture
    #[error("No products found in fixture")]
    NoProducts,
}
