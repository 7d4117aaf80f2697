// Page objects - one type per logical screen of the client application
//
// The graph is linear and forward-only:
//
//     LoginPage -> DashboardPage -> OrdersHistoryPage -> OrderSummaryPage
//
// Every transition takes `self` by value and hands the session to the
// successor, so a page object cannot be used once it has navigated away.

pub mod dashboard;
pub mod login;
pub mod order_summary;
pub mod orders_history;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use order_summary::OrderSummaryPage;
pub use orders_history::{ORDER_ROW_TIMEOUT, OrdersHistoryPage};

use crate::selector::Selector;

/// The navigation button that opens the order history.
pub(crate) fn orders_button() -> Selector {
    Selector::role("button", "ORDERS")
}
