//! Checkout modal
//!
//! Collects contact details, shows the order summary and drives the
//! submission: validate, build the payload, enter the submitting stage and
//! report the outcome. Exactly one network call may be in flight; the
//! confirm button is disabled and relabeled while it is.

use leptos::prelude::*;

use storefront_core::{
    cart::Cart,
    checkout::{CheckoutFlow, CheckoutStage},
    contact::ContactDetails,
    order::OrderPayload,
    summary::CartSummary,
};

use crate::{announce, notice::Notice, submit};

/// Contact field signals backing the checkout form.
#[derive(Debug, Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        ContactFields {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
        }
    }

    fn details(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
    }
}

fn start_submission(
    cart: RwSignal<Cart>,
    flow: RwSignal<CheckoutFlow>,
    notice: RwSignal<Option<Notice>>,
    live_message: RwSignal<(u64, String)>,
    fields: ContactFields,
) {
    let contact = fields.details();

    // Validation failure blocks the submission without any transition;
    // the user corrects the fields and tries again.
    if let Err(error) = contact.validate() {
        notice.set(Some(Notice::problem(error.to_string())));
        return;
    }

    let payload = match OrderPayload::build(&cart.get_untracked(), &contact) {
        Ok(payload) => payload,
        Err(error) => {
            leptos::logging::error!("Order payload rejected: {error}");
            notice.set(Some(Notice::problem(error.to_string())));
            return;
        }
    };

    // Re-entrancy guard: a second confirm while one submission is in
    // flight is refused here and never reaches the network.
    let may_submit = flow
        .try_update(CheckoutFlow::begin_submission)
        .unwrap_or(false);

    if !may_submit {
        return;
    }

    leptos::task::spawn_local(async move {
        match submit::post_order(crate::ORDER_PATH, &payload).await {
            Ok(()) => {
                flow.update(CheckoutFlow::submission_succeeded);
                cart.update(Cart::clear);
                fields.reset();
                notice.set(Some(Notice::OrderReceived));
                announce(live_message, "Order submitted.".to_string());
            }
            Err(error) => {
                flow.update(CheckoutFlow::submission_failed);
                notice.set(Some(Notice::problem(format!(
                    "We could not send your order: {error}. Please try again."
                ))));
            }
        }
    });
}

/// Checkout modal with its backdrop overlay.
#[component]
pub(crate) fn CheckoutModal(
    /// Shared cart state.
    cart: RwSignal<Cart>,
    /// Shared panel flow.
    flow: RwSignal<CheckoutFlow>,
    /// Blocking notice slot.
    notice: RwSignal<Option<Notice>>,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let fields = ContactFields::new();

    let is_open = move || {
        matches!(
            flow.get().stage(),
            CheckoutStage::CheckoutOpen | CheckoutStage::Submitting
        )
    };
    let is_submitting = move || flow.get().is_submitting();

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        start_submission(cart, flow, notice, live_message, fields);
    };

    view! {
        <div
            class="overlay checkout-overlay"
            class:active=is_open
            on:click=move |_| flow.update(CheckoutFlow::close_panels)
        ></div>
        <div class="checkout-modal" class:active=is_open role="dialog" aria-label="Checkout">
            <header class="checkout-header">
                <h2>"Checkout"</h2>
                <button
                    type="button"
                    class="checkout-close"
                    aria-label="Close checkout"
                    on:click=move |_| flow.update(CheckoutFlow::close_panels)
                >
                    "x"
                </button>
            </header>
            <OrderSummary cart=cart />
            <form class="checkout-form" on:submit=on_submit>
                <ContactField label="Name" input_type="text" name="name" value=fields.name />
                <ContactField label="Email" input_type="text" name="email" value=fields.email />
                <ContactField label="Phone" input_type="tel" name="phone" value=fields.phone />
                <button type="submit" class="btn-primary btn-confirm" disabled=is_submitting>
                    {move || if is_submitting() { "Sending order..." } else { "Confirm order" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn ContactField(
    label: &'static str,
    input_type: &'static str,
    name: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=input_type
                name=name
                prop:value=value
                on:input=move |event| value.set(event_target_value(&event))
            />
        </label>
    }
}

#[component]
fn OrderSummary(cart: RwSignal<Cart>) -> impl IntoView {
    move || {
        let summary = CartSummary::project(&cart.get());

        view! {
            <div class="checkout-summary">
                <h3>"Order Summary"</h3>
                <ul class="order-items">
                    {summary
                        .lines
                        .into_iter()
                        .map(|line| {
                            view! {
                                <li>{format!("{}x {} - {}", line.quantity, line.name, line.line_total)}</li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="order-total">
                    <strong>{format!("Total: {}", summary.total)}</strong>
                </p>
            </div>
        }
    }
}
