// Order summary page - terminal screen of the order flow

use crate::error::Result;
use crate::selector::Selector;
use crate::surface::Surface;

/// Text the summary's tagline shows for a placed order
pub const ORDER_PLACED_TAGLINE: &str = "Thank you for Shopping With Us";

/// Details of a single order. Verification only; there is no further transition.
#[derive(Debug)]
pub struct OrderSummaryPage<S: Surface> {
    session: S,
}

impl<S: Surface> OrderSummaryPage<S> {
    pub(crate) fn new(session: S) -> Self {
        Self { session }
    }

    /// Asserts the tagline confirms the order was placed.
    pub async fn verify_order_placed(&self) -> Result<()> {
        self.session
            .expect_text(&Selector::css(".tagline"), ORDER_PLACED_TAGLINE)
            .await
    }

    /// Ends the flow and gives the session back for teardown.
    pub fn into_session(self) -> S {
        self.session
    }
}
