// Surface - the session handle the page objects drive
//
// A Surface is the live browser screen of one scenario. Page objects own it
// exclusively and move it into their successor on every transition.
//
// Implementations:
// - BrowserSession: a Playwright page (crate::browser)
// - test doubles: scripted screens for exercising the page graph offline

use crate::error::Result;
use crate::selector::Selector;
use std::future::Future;
use std::time::Duration;

/// UI capabilities required by the page objects.
///
/// Every method completes when the interaction has finished from the
/// caller's point of view, or fails once the implementation's wait gives up.
pub trait Surface: Send + Sync {
    /// Navigates to `url` and waits for the load to finish.
    fn goto(&self, url: &str) -> impl Future<Output = Result<()>> + Send;

    /// Types `value` into the input matched by `selector`, replacing its content.
    fn fill(&self, selector: &Selector, value: &str) -> impl Future<Output = Result<()>> + Send;

    /// Clicks the element matched by `selector`.
    fn click(&self, selector: &Selector) -> impl Future<Output = Result<()>> + Send;

    /// Waits until `selector` matches a visible element.
    ///
    /// `None` leaves the timeout to the implementation's own default.
    /// Fails with [`crate::Error::ElementNotFound`] when the wait expires.
    fn wait_for(
        &self,
        selector: &Selector,
        timeout: Option<Duration>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Reloads the current view.
    fn reload(&self) -> impl Future<Output = Result<()>> + Send;

    /// Asserts that the element matched by `selector` contains `expected` text.
    ///
    /// Fails with [`crate::Error::Assertion`] when it does not.
    fn expect_text(
        &self,
        selector: &Selector,
        expected: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}
