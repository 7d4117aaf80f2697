// Order transaction scenario
//
// Feature: order transaction
//   Given place the item order with <username> and <password>
//   And the user is on landing page
//   When I login to portal with <username> and <password>
//   And navigate to orders page
//   And select the orderId
//
// State that the steps share (the order id, the current page object) is
// passed along explicitly.

use crate::api::ApiClient;
use crate::browser::BrowserSession;
use crate::config::FlowConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::pages::{LoginPage, OrderSummaryPage};
use crate::surface::Surface;
use tracing::Instrument;

/// Runs the order transaction on `session` and returns the opened order summary.
///
/// The order is placed through the API before the browser logs in; the
/// created id is then looked up in the order history.
pub async fn order_transaction<S: Surface>(
    session: S,
    api: &ApiClient,
    config: &FlowConfig,
    credentials: &Credentials,
) -> Result<OrderSummaryPage<S>> {
    let order_id = api
        .create_order(credentials)
        .instrument(tracing::info_span!("given", step = "place the item order"))
        .await?;

    let login = LoginPage::new(session, config);
    login
        .navigate()
        .instrument(tracing::info_span!("given", step = "the user is on landing page"))
        .await?;

    let dashboard = login
        .login(credentials)
        .instrument(tracing::info_span!("when", step = "I login to portal"))
        .await?;

    let history = dashboard
        .go_to_orders()
        .instrument(tracing::info_span!("when", step = "navigate to orders page"))
        .await?;

    history
        .select_order(&order_id)
        .instrument(tracing::info_span!("when", step = "select the orderId", order_id = %order_id))
        .await
}

/// Verifies the summary and closes the browser session.
///
/// The session is closed even when verification fails; the verification
/// error takes precedence over a close error.
pub async fn verify_and_close(summary: OrderSummaryPage<BrowserSession>) -> Result<()> {
    let verified = summary
        .verify_order_placed()
        .instrument(tracing::info_span!("then", step = "order is placed"))
        .await;
    let closed = summary.into_session().close().await;
    verified.and(closed)
}

/// Launches a browser for `config`, runs the order transaction for one set of
/// credentials and verifies the result.
pub async fn run(config: &FlowConfig, credentials: &Credentials) -> Result<()> {
    let api = ApiClient::new(config)?;
    let session = BrowserSession::launch(config).await?;
    let summary = order_transaction(session, &api, config, credentials).await?;
    verify_and_close(summary).await
}
