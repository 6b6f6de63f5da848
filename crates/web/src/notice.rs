//! Blocking notices
//!
//! One-time overlays shown after a submission outcome or a validation
//! failure. Dismissing a notice returns the page to its interactive state;
//! nothing here is fatal.

use leptos::prelude::*;

/// A one-time blocking notice shown over the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    /// The order was received by the endpoint.
    OrderReceived,

    /// A user-correctable problem: validation or submission failure.
    Problem(String),
}

impl Notice {
    /// A problem notice with the given message.
    pub(crate) fn problem(message: String) -> Self {
        Notice::Problem(message)
    }

    /// Title and body shown in the overlay.
    pub(crate) fn content(&self) -> (&'static str, String) {
        match self {
            Notice::OrderReceived => (
                "Order received!",
                "We have received your order and will contact you shortly to confirm the details."
                    .to_string(),
            ),
            Notice::Problem(message) => ("Something went wrong", message.clone()),
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Notice::OrderReceived => "notice notice-success",
            Notice::Problem(_) => "notice notice-error",
        }
    }
}

/// Overlay rendering the current notice, if any.
#[component]
pub(crate) fn NoticeOverlay(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            let (title, body) = current.content();

            view! {
                <div class="notice-overlay">
                    <div class=current.css_class() role="alertdialog" aria-label=title>
                        <h3>{title}</h3>
                        <p>{body}</p>
                        <button
                            type="button"
                            class="btn-primary"
                            on:click=move |_| notice.set(None)
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
