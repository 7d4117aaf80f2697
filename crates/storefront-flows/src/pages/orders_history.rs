// Orders history page - table of the user's orders
//
// Rows can render before the order created through the API shows up, so the
// lookup reloads the view once when the first wait fails.

use crate::api::OrderId;
use crate::error::Result;
use crate::pages::OrderSummaryPage;
use crate::selector::Selector;
use crate::surface::Surface;
use std::time::Duration;

/// Wait window of the first lookup attempt. Fixed, not configurable.
pub const ORDER_ROW_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug)]
pub struct OrdersHistoryPage<S: Surface> {
    session: S,
}

impl<S: Surface> OrdersHistoryPage<S> {
    pub(crate) fn new(session: S) -> Self {
        Self { session }
    }

    /// Finds the row of `order_id`, clicks its "View" button and opens the summary.
    ///
    /// Two attempts at most:
    /// 1. wait up to [`ORDER_ROW_TIMEOUT`] for the row;
    /// 2. on any failure of (1), reload once and wait again with the
    ///    surface's default timeout.
    ///
    /// A failure of the second attempt propagates. Note that (1) failing for a
    /// reason other than a stale table (wrong id, closed page) still triggers
    /// the reload.
    #[tracing::instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn select_order(self, order_id: &OrderId) -> Result<OrderSummaryPage<S>> {
        let row = order_row(order_id);

        let found_first = match self.session.wait_for(&row, Some(ORDER_ROW_TIMEOUT)).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Row with ID {} not found. Refreshing page and trying again...",
                    order_id
                );
                false
            }
        };

        if !found_first {
            self.session.reload().await?;
            self.session.wait_for(&row, None).await?;
        }

        self.session
            .click(&row.within(Selector::role("button", "View")))
            .await?;

        Ok(OrderSummaryPage::new(self.session))
    }
}

/// The table row whose text contains `order_id`.
pub fn order_row(order_id: &OrderId) -> Selector {
    Selector::css("tr").has_text(order_id.as_str())
}
