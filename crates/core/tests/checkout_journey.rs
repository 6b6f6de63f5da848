//! Integration test walking the whole storefront journey: catalog load,
//! cart mutations, summary projection, checkout flow and order payload.
//!
//! Mirrors the observable behavior of the page: a visitor adds products,
//! adjusts quantities in the cart sidebar, opens checkout, fills in contact
//! details and confirms; a successful submission empties the cart and closes
//! every panel, a failed one keeps the checkout open for a manual retry.

use rusty_money::{Money, iso};
use testresult::TestResult;

use storefront_core::prelude::*;

const CATALOG_YAML: &str = "
products:
  bread:
    name: Bread
    price: 3.50 USD
  milk:
    name: Milk
    price: 2.00 USD
  coffee:
    name: Coffee
    price: 4.25 USD
";

fn filled_contact() -> ContactDetails {
    ContactDetails {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "555-0100".to_string(),
    }
}

fn add_from_catalog(cart: &mut Cart, catalog: &Catalog, key: &str) -> TestResult {
    let product = catalog
        .products()
        .iter()
        .find(|product| product.key == key)
        .ok_or_else(|| format!("no product with key {key}"))?;

    cart.add_item(&product.name, product.price)?;

    Ok(())
}

#[test]
fn successful_journey_clears_the_cart_and_closes_the_panels() -> TestResult {
    let catalog = load_catalog(CATALOG_YAML)?;
    let mut cart = Cart::new(catalog.currency());
    let mut flow = CheckoutFlow::new();

    // Add Bread twice and Milk once; duplicates merge into one line.
    add_from_catalog(&mut cart, &catalog, "bread")?;
    flow.open_cart();
    add_from_catalog(&mut cart, &catalog, "bread")?;
    add_from_catalog(&mut cart, &catalog, "milk")?;

    let summary = CartSummary::project(&cart);

    assert_eq!(summary.unit_count, 3);
    assert_eq!(summary.total, "$9.00");
    assert!(summary.checkout_enabled);
    assert_eq!(summary.lines.len(), 2);

    // Checkout opens because the cart is non-empty.
    assert!(flow.open_checkout(cart.is_empty()));

    let contact = filled_contact();
    contact.validate()?;

    let payload = OrderPayload::build(&cart, &contact)?;

    assert_eq!(
        payload.products,
        "2x Bread ($3.50 each), 1x Milk ($2.00 each)"
    );
    assert_eq!(payload.total, "$9.00");

    // Exactly one submission may be in flight.
    assert!(flow.begin_submission());
    assert!(!flow.begin_submission());

    // The endpoint answered 2xx.
    flow.submission_succeeded();
    cart.clear();

    assert_eq!(flow.stage(), CheckoutStage::Closed);
    assert!(cart.is_empty());
    assert!(!CartSummary::project(&cart).checkout_enabled);

    Ok(())
}

#[test]
fn failed_submission_preserves_cart_and_checkout_for_retry() -> TestResult {
    let catalog = load_catalog(CATALOG_YAML)?;
    let mut cart = Cart::new(catalog.currency());
    let mut flow = CheckoutFlow::new();

    add_from_catalog(&mut cart, &catalog, "coffee")?;

    assert!(flow.open_checkout(cart.is_empty()));
    assert!(flow.begin_submission());

    flow.submission_failed();

    assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);
    assert_eq!(cart.unit_count(), 1);

    // The user may retry by hand; nothing retries automatically.
    assert!(flow.begin_submission());

    Ok(())
}

#[test]
fn validation_blocks_submission_before_any_network_call() -> TestResult {
    let catalog = load_catalog(CATALOG_YAML)?;
    let mut cart = Cart::new(catalog.currency());
    let mut flow = CheckoutFlow::new();

    add_from_catalog(&mut cart, &catalog, "milk")?;
    flow.open_checkout(cart.is_empty());

    let missing_email = ContactDetails {
        name: "Ana".to_string(),
        email: String::new(),
        phone: "555-0100".to_string(),
    };

    assert_eq!(
        missing_email.validate(),
        Err(ContactError::MissingField("email"))
    );

    let malformed_email = ContactDetails {
        email: "a@b".to_string(),
        ..filled_contact()
    };

    assert_eq!(
        malformed_email.validate(),
        Err(ContactError::InvalidEmail("a@b".to_string()))
    );

    // The page does not call begin_submission on validation failure, so the
    // flow never leaves the checkout stage.
    assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);

    Ok(())
}

#[test]
fn decrementing_the_only_item_twice_disables_checkout() -> TestResult {
    let catalog = load_catalog(CATALOG_YAML)?;
    let mut cart = Cart::new(catalog.currency());
    let mut flow = CheckoutFlow::new();

    add_from_catalog(&mut cart, &catalog, "bread")?;
    cart.change_quantity("Bread", -1)?;

    // The second decrement finds nothing: a reported no-op, as the page
    // no longer renders a row for the removed line.
    assert!(cart.change_quantity("Bread", -1).is_err());

    assert!(cart.is_empty());
    assert!(!CartSummary::project(&cart).checkout_enabled);
    assert!(!flow.open_checkout(cart.is_empty()));

    Ok(())
}

#[test]
fn totals_track_arbitrary_mutation_sequences() -> TestResult {
    let catalog = load_catalog(CATALOG_YAML)?;
    let mut cart = Cart::new(catalog.currency());

    add_from_catalog(&mut cart, &catalog, "bread")?;
    add_from_catalog(&mut cart, &catalog, "coffee")?;
    cart.change_quantity("Coffee", 1)?;
    add_from_catalog(&mut cart, &catalog, "milk")?;
    cart.remove_item("Bread")?;
    cart.change_quantity("Milk", 1)?;

    let mut expected_minor = 0_i64;

    for line in cart.iter() {
        assert!(line.quantity() >= 1, "no zero or negative quantities");
        expected_minor += line.unit_price().to_minor_units() * i64::from(line.quantity());
    }

    assert_eq!(cart.subtotal(), Money::from_minor(expected_minor, iso::USD));
    assert_eq!(expected_minor, 425 * 2 + 200 * 2);

    Ok(())
}
