//! Cart sidebar
//!
//! The sliding cart panel: line list, total and the checkout button. All
//! projections come from [`CartSummary`]; the panel itself holds no cart
//! state of its own.

use leptos::prelude::*;

use storefront_core::{
    cart::{Cart, CartError},
    checkout::{CheckoutFlow, CheckoutStage},
    summary::CartSummary,
};

pub(crate) mod line_item;

use line_item::CartLine;

/// Apply a cart mutation and report, rather than propagate, failures.
///
/// Unknown-item mutations can only come from stale UI wiring, so they are
/// logged as programming errors and the cart is left as it was.
pub(crate) fn apply_cart_mutation(
    cart: RwSignal<Cart>,
    mutate: impl FnOnce(&mut Cart) -> Result<(), CartError>,
) {
    cart.update(|cart| {
        if let Err(error) = mutate(cart) {
            leptos::logging::error!("Cart mutation rejected: {error}");
        }
    });
}

#[component]
fn CartBody(cart: RwSignal<Cart>, live_message: RwSignal<(u64, String)>) -> impl IntoView {
    move || {
        let summary = CartSummary::project(&cart.get());

        if summary.lines.is_empty() {
            view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
        } else {
            view! {
                <ul class="cart-lines">
                    {summary
                        .lines
                        .into_iter()
                        .map(|line| view! { <CartLine line=line cart=cart live_message=live_message /> })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }
    }
}

/// Cart sidebar panel with its backdrop overlay.
#[component]
pub(crate) fn CartPanel(
    /// Shared cart state.
    cart: RwSignal<Cart>,
    /// Shared panel flow.
    flow: RwSignal<CheckoutFlow>,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let is_open = move || flow.get().stage() == CheckoutStage::CartOpen;

    view! {
        <div
            class="overlay cart-overlay"
            class:active=is_open
            on:click=move |_| flow.update(CheckoutFlow::close_panels)
        ></div>
        <aside class="cart-sidebar" class:active=is_open aria-label="Shopping cart">
            <header class="cart-header">
                <h2>"Your Cart"</h2>
                <button
                    type="button"
                    class="cart-close"
                    aria-label="Close cart"
                    on:click=move |_| flow.update(CheckoutFlow::close_panels)
                >
                    "x"
                </button>
            </header>
            <CartBody cart=cart live_message=live_message />
            <footer class="cart-footer">
                <p class="cart-total-row">
                    <span>"Total"</span>
                    <span>{move || CartSummary::project(&cart.get()).total}</span>
                </p>
                <button
                    type="button"
                    class="btn-checkout"
                    disabled=move || !CartSummary::project(&cart.get()).checkout_enabled
                    on:click=move |_| {
                        let cart_is_empty = cart.get_untracked().is_empty();

                        flow.update(|flow| {
                            flow.open_checkout(cart_is_empty);
                        });
                    }
                >
                    "Checkout"
                </button>
            </footer>
        </aside>
    }
}
