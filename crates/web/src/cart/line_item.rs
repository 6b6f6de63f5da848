//! Cart line rows
//!
//! Each row mutates the shared cart through the stable product name, never a
//! positional index, so removals cannot invalidate the wiring of the
//! remaining rows.

use leptos::prelude::*;

use storefront_core::{cart::Cart, summary::SummaryLine};

use crate::announce;

use super::apply_cart_mutation;

#[component]
pub(super) fn CartLine(
    line: SummaryLine,
    cart: RwSignal<Cart>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let name_for_decrement = line.name.clone();
    let name_for_increment = line.name.clone();
    let name_for_remove = line.name.clone();
    let name_for_remove_announce = line.name.clone();

    let decrement_label = format!("Remove one {} from the cart", line.name);
    let increment_label = format!("Add one more {} to the cart", line.name);
    let remove_label = format!("Remove {} from the cart", line.name);

    view! {
        <li class="cart-line">
            <div class="cart-line-info">
                <p class="cart-line-name">{line.name.clone()}</p>
                <p class="cart-line-price">{line.unit_price.clone()}</p>
            </div>
            <div class="cart-line-quantity">
                <button
                    type="button"
                    class="qty-btn"
                    aria-label=decrement_label
                    on:click=move |_| {
                        apply_cart_mutation(cart, |cart| {
                            cart.change_quantity(&name_for_decrement, -1)
                        });
                    }
                >
                    "-"
                </button>
                <span class="cart-line-count">{line.quantity}</span>
                <button
                    type="button"
                    class="qty-btn"
                    aria-label=increment_label
                    on:click=move |_| {
                        apply_cart_mutation(cart, |cart| {
                            cart.change_quantity(&name_for_increment, 1)
                        });
                    }
                >
                    "+"
                </button>
            </div>
            <p class="cart-line-total">{line.line_total.clone()}</p>
            <button
                type="button"
                class="cart-line-remove"
                aria-label=remove_label
                on:click=move |_| {
                    apply_cart_mutation(cart, |cart| cart.remove_item(&name_for_remove));
                    announce(
                        live_message,
                        format!("Removed {name_for_remove_announce} from cart."),
                    );
                }
            >
                "Remove"
            </button>
        </li>
    }
}
