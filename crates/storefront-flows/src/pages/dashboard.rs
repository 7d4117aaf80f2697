// Dashboard page - product listing shown after login

use crate::error::Result;
use crate::pages::{OrdersHistoryPage, orders_button};
use crate::surface::Surface;

#[derive(Debug)]
pub struct DashboardPage<S: Surface> {
    session: S,
}

impl<S: Surface> DashboardPage<S> {
    pub(crate) fn new(session: S) -> Self {
        Self { session }
    }

    /// Opens the order history.
    pub async fn go_to_orders(self) -> Result<OrdersHistoryPage<S>> {
        self.session.click(&orders_button()).await?;
        Ok(OrdersHistoryPage::new(self.session))
    }
}
