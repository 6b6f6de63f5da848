//! Checkout flow

/// Which overlay of the page is currently visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStage {
    /// All panels closed.
    #[default]
    Closed,

    /// Cart sidebar open.
    CartOpen,

    /// Checkout panel open, collecting contact details.
    CheckoutOpen,

    /// An order submission is in flight.
    Submitting,
}

/// State machine over the cart and checkout panels.
///
/// Panel transitions are driven by user clicks; the submission transitions
/// guard the at-most-one-in-flight property: once [`CheckoutFlow::begin_submission`]
/// succeeds, further confirm requests are rejected until an outcome is
/// reported via [`CheckoutFlow::submission_succeeded`] or
/// [`CheckoutFlow::submission_failed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
}

impl CheckoutFlow {
    /// Create a flow with every panel closed.
    pub fn new() -> Self {
        CheckoutFlow::default()
    }

    /// The currently visible stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.stage == CheckoutStage::Submitting
    }

    /// Open the cart sidebar. Ignored while a submission is in flight.
    pub fn open_cart(&mut self) {
        if self.stage != CheckoutStage::Submitting {
            self.stage = CheckoutStage::CartOpen;
        }
    }

    /// Close every panel. Ignored while a submission is in flight.
    pub fn close_panels(&mut self) {
        if self.stage != CheckoutStage::Submitting {
            self.stage = CheckoutStage::Closed;
        }
    }

    /// Open the checkout panel.
    ///
    /// Opening with an empty cart is a no-op, as is opening while a
    /// submission is in flight. Returns whether the panel was opened.
    pub fn open_checkout(&mut self, cart_is_empty: bool) -> bool {
        if cart_is_empty || self.stage == CheckoutStage::Submitting {
            return false;
        }

        self.stage = CheckoutStage::CheckoutOpen;

        true
    }

    /// Move into the submitting stage.
    ///
    /// Returns whether the caller may proceed with the network call. Only a
    /// flow sitting in [`CheckoutStage::CheckoutOpen`] may begin a
    /// submission; in particular a second confirm click while one is in
    /// flight returns `false`.
    pub fn begin_submission(&mut self) -> bool {
        if self.stage != CheckoutStage::CheckoutOpen {
            return false;
        }

        self.stage = CheckoutStage::Submitting;

        true
    }

    /// Record a successful submission outcome: all panels close.
    pub fn submission_succeeded(&mut self) {
        if self.stage == CheckoutStage::Submitting {
            self.stage = CheckoutStage::Closed;
        }
    }

    /// Record a failed submission outcome: the checkout panel stays open so
    /// the user can correct and retry. No automatic retry.
    pub fn submission_failed(&mut self) {
        if self.stage == CheckoutStage::Submitting {
            self.stage = CheckoutStage::CheckoutOpen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let flow = CheckoutFlow::new();

        assert_eq!(flow.stage(), CheckoutStage::Closed);
    }

    #[test]
    fn open_and_close_cart_panel() {
        let mut flow = CheckoutFlow::new();

        flow.open_cart();
        assert_eq!(flow.stage(), CheckoutStage::CartOpen);

        flow.close_panels();
        assert_eq!(flow.stage(), CheckoutStage::Closed);
    }

    #[test]
    fn checkout_requires_a_non_empty_cart() {
        let mut flow = CheckoutFlow::new();

        flow.open_cart();

        assert!(!flow.open_checkout(true));
        assert_eq!(flow.stage(), CheckoutStage::CartOpen);

        assert!(flow.open_checkout(false));
        assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);
    }

    #[test]
    fn begin_submission_only_from_open_checkout() {
        let mut flow = CheckoutFlow::new();

        assert!(!flow.begin_submission());

        flow.open_cart();
        assert!(!flow.begin_submission());

        flow.open_checkout(false);
        assert!(flow.begin_submission());
        assert!(flow.is_submitting());
    }

    #[test]
    fn second_confirm_while_in_flight_is_rejected() {
        let mut flow = CheckoutFlow::new();

        flow.open_checkout(false);

        assert!(flow.begin_submission());
        assert!(!flow.begin_submission());
    }

    #[test]
    fn panels_stay_put_while_submitting() {
        let mut flow = CheckoutFlow::new();

        flow.open_checkout(false);
        flow.begin_submission();

        flow.close_panels();
        assert_eq!(flow.stage(), CheckoutStage::Submitting);

        flow.open_cart();
        assert_eq!(flow.stage(), CheckoutStage::Submitting);

        assert!(!flow.open_checkout(false));
    }

    #[test]
    fn success_closes_all_panels() {
        let mut flow = CheckoutFlow::new();

        flow.open_checkout(false);
        flow.begin_submission();
        flow.submission_succeeded();

        assert_eq!(flow.stage(), CheckoutStage::Closed);
    }

    #[test]
    fn failure_returns_to_checkout_for_a_manual_retry() {
        let mut flow = CheckoutFlow::new();

        flow.open_checkout(false);
        flow.begin_submission();
        flow.submission_failed();

        assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);

        // The confirm control is usable again after a failure.
        assert!(flow.begin_submission());
    }

    #[test]
    fn outcome_reports_outside_submitting_are_ignored() {
        let mut flow = CheckoutFlow::new();

        flow.open_checkout(false);
        flow.submission_succeeded();

        assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);

        flow.submission_failed();

        assert_eq!(flow.stage(), CheckoutStage::CheckoutOpen);
    }
}
