//! Site navigation
//!
//! Mobile menu toggle, smooth-scroll anchors and the header cart toggle.
//! Thin UI glue over the shared page signals.

use leptos::prelude::*;

use storefront_core::{cart::Cart, checkout::CheckoutFlow};

/// Anchors shown in the navigation menu.
const NAV_LINKS: [(&str, &str); 2] = [("#products", "Products"), ("#contact", "Contact")];

/// Page header: logo, nav links, hamburger and cart toggle.
#[component]
pub(crate) fn SiteNav(cart: RwSignal<Cart>, flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <nav class="site-nav" aria-label="Main navigation">
                <a class="site-logo" href="#top">"Storefront"</a>
                <button
                    type="button"
                    class="hamburger"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="hamburger-bar"></span>
                    <span class="hamburger-bar"></span>
                    <span class="hamburger-bar"></span>
                </button>
                <ul class="nav-links" class:active=move || menu_open.get()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <NavAnchor href=href label=label menu_open=menu_open /> })
                        .collect_view()}
                </ul>
                <button
                    type="button"
                    class="cart-toggle"
                    aria-label="Open cart"
                    on:click=move |_| flow.update(CheckoutFlow::open_cart)
                >
                    "Cart"
                    <span class="cart-count">{move || cart.get().unit_count()}</span>
                </button>
            </nav>
        </header>
    }
}

#[component]
fn NavAnchor(
    href: &'static str,
    label: &'static str,
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <li>
            <a
                href=href
                on:click=move |event| {
                    event.prevent_default();
                    scroll_to_anchor(href);
                    // Jumping from the mobile menu also closes it.
                    menu_open.set(false);
                }
            >
                {label}
            </a>
        </li>
    }
}

/// Smooth-scroll the viewport to the element matching `selector`.
#[cfg(target_arch = "wasm32")]
fn scroll_to_anchor(selector: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let Ok(Some(target)) = document.query_selector(selector) else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);

    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_anchor(_selector: &str) {}
