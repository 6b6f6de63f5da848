//! Storefront page application
//!
//! Client-side behavior for the storefront marketing page: navigation,
//! product grid, cart sidebar and checkout modal, rendered with Leptos CSR.

use std::sync::Arc;

use leptos::prelude::*;

use storefront_core::{
    cart::Cart,
    checkout::CheckoutFlow,
    fixtures::{Catalog, load_catalog},
};

mod cart;
mod checkout;
mod nav;
mod notice;
mod products;
mod submit;

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/storefront.yml");

/// Path receiving the URL-encoded order form, resolved against the page
/// origin at submission time.
pub(crate) const ORDER_PATH: &str = "/";

/// Parsed application data used by the UI.
#[derive(Debug)]
struct AppData {
    /// Product catalog shown in the products section.
    catalog: Arc<Catalog>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = load_catalog(PRODUCTS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load product catalog: {error}"))?;

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}

/// Main page shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            // Shared page state: the cart itself, the panel flow, the current
            // blocking notice and the polite live-region message.
            let cart = RwSignal::new(Cart::new(app_data.catalog.currency()));
            let flow = RwSignal::new(CheckoutFlow::new());
            let notice = RwSignal::new(None::<notice::Notice>);
            let live_message = RwSignal::new((0_u64, String::new()));

            view! {
                <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                    {move || live_message.get().1}
                </p>
                <nav::SiteNav cart=cart flow=flow />
                <main id="top">
                    <section class="hero">
                        <h1>"Fresh from our counter"</h1>
                        <p>"Order today, enjoy tomorrow. We confirm every order by phone."</p>
                        <a class="btn-primary" href="#products">"Browse products"</a>
                    </section>
                    <products::ProductsSection
                        catalog=Arc::clone(&app_data.catalog)
                        cart=cart
                        flow=flow
                        live_message=live_message
                    />
                    <section id="contact" class="contact-section">
                        <h2 class="section-title">"Find us"</h2>
                        <p>"Market Street 12, open Tuesday to Sunday."</p>
                    </section>
                </main>
                <cart::CartPanel cart=cart flow=flow live_message=live_message />
                <checkout::CheckoutModal
                    cart=cart
                    flow=flow
                    notice=notice
                    live_message=live_message
                />
                <notice::NoticeOverlay notice=notice />
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main>
                <p class="error-text">{error_message}</p>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
