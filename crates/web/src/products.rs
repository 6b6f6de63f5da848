//! Products section
//!
//! Product cards built from the catalog fixture. Adding a product mutates
//! the shared cart, opens the cart sidebar and flashes a short confirmation
//! on the pressed button.

use std::{collections::BTreeSet, sync::Arc};

use leptos::prelude::*;

use storefront_core::{
    cart::Cart,
    checkout::CheckoutFlow,
    fixtures::{Catalog, CatalogProduct},
    summary::format_money,
};

use crate::announce;

pub(crate) fn start_added_confirmation(confirmed: RwSignal<BTreeSet<String>>, key: &str) {
    confirmed.update(|states| {
        states.insert(key.to_string());
    });
}

pub(crate) fn clear_added_confirmation(confirmed: RwSignal<BTreeSet<String>>, key: &str) {
    confirmed.update(|states| {
        states.remove(key);
    });
}

pub(crate) fn is_added_confirmed(confirmed: RwSignal<BTreeSet<String>>, key: &str) -> bool {
    confirmed.with(|states| states.contains(key))
}

/// Product grid section.
#[component]
pub(crate) fn ProductsSection(
    /// Catalog loaded from the products fixture.
    catalog: Arc<Catalog>,
    /// Shared cart state.
    cart: RwSignal<Cart>,
    /// Shared panel flow.
    flow: RwSignal<CheckoutFlow>,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let added_confirmations = RwSignal::new(BTreeSet::<String>::new());

    view! {
        <section id="products" class="products-section">
            <h2 class="section-title">"Our Products"</h2>
            <div class="product-grid">
                {catalog
                    .products()
                    .iter()
                    .cloned()
                    .map(|product| {
                        view! {
                            <ProductCard
                                product=product
                                cart=cart
                                flow=flow
                                live_message=live_message
                                added_confirmations=added_confirmations
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(
    product: CatalogProduct,
    cart: RwSignal<Cart>,
    flow: RwSignal<CheckoutFlow>,
    live_message: RwSignal<(u64, String)>,
    added_confirmations: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let price_text = format_money(&product.price);
    let price = product.price;
    let display_name = product.name.clone();
    let name_for_add = product.name.clone();
    let name_for_announce = product.name;
    let key_for_class = product.key.clone();
    let key_for_click = product.key.clone();
    let key_for_animation_end = product.key.clone();
    let add_button_label = format!("Add {display_name} to cart");

    view! {
        <article class="product-card">
            <h3 class="product-name">{display_name}</h3>
            <p class="product-price">{price_text}</p>
            <button
                type="button"
                aria-label=add_button_label
                class=move || {
                    if is_added_confirmed(added_confirmations, &key_for_class) {
                        "btn-add-cart added"
                    } else {
                        "btn-add-cart"
                    }
                }
                on:click=move |_| {
                    crate::cart::apply_cart_mutation(cart, |cart| {
                        cart.add_item(&name_for_add, price)
                    });

                    flow.update(CheckoutFlow::open_cart);
                    start_added_confirmation(added_confirmations, &key_for_click);
                    announce(live_message, format!("Added {name_for_announce} to cart."));
                }
                on:animationend=move |_| {
                    clear_added_confirmation(added_confirmations, &key_for_animation_end);
                }
            >
                {move || {
                    if is_added_confirmed(added_confirmations, &product.key) {
                        "Added!"
                    } else {
                        "Add to cart"
                    }
                }}
            </button>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_added_confirmation_adds_key() {
        let confirmed = RwSignal::new(BTreeSet::<String>::new());

        start_added_confirmation(confirmed, "bread");

        assert!(is_added_confirmed(confirmed, "bread"));
    }

    #[test]
    fn test_clear_added_confirmation_removes_key() {
        let confirmed = RwSignal::new(BTreeSet::<String>::new());

        start_added_confirmation(confirmed, "bread");
        clear_added_confirmation(confirmed, "bread");

        assert!(!is_added_confirmed(confirmed, "bread"));
    }

    #[test]
    fn test_clear_added_confirmation_nonexistent_key() {
        let confirmed = RwSignal::new(BTreeSet::<String>::new());

        clear_added_confirmation(confirmed, "missing");

        assert!(confirmed.get_untracked().is_empty());
    }

    #[test]
    fn test_confirmations_track_keys_independently() {
        let confirmed = RwSignal::new(BTreeSet::<String>::new());

        start_added_confirmation(confirmed, "bread");
        start_added_confirmation(confirmed, "milk");
        clear_added_confirmation(confirmed, "bread");

        assert!(!is_added_confirmed(confirmed, "bread"));
        assert!(is_added_confirmed(confirmed, "milk"));
    }
}
