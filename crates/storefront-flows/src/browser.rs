// BrowserSession - a Playwright-backed Surface
//
// Owns the whole browser stack of one scenario (driver, browser, context,
// page) so that scenarios stay isolated from each other.

use crate::config::{BrowserName, FlowConfig};
use crate::error::{Error, Result};
use crate::selector::Selector;
use crate::surface::Surface;
use playwright_rs::{Browser, BrowserContext, LaunchOptions, Page, Playwright, expect};
use std::time::Duration;

/// Default wait used when a caller does not pass an explicit timeout.
///
/// Matches Playwright's own action timeout.
const DEFAULT_WAIT: Duration = Duration::from_millis(playwright_rs::DEFAULT_TIMEOUT_MS as u64);

/// One isolated browser session: a fresh context with a single page.
pub struct BrowserSession {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
}

impl BrowserSession {
    /// Launches the configured browser and opens a page in a new context.
    ///
    /// `chrome` launches Chromium on the `chrome` channel; `firefox` and
    /// `webkit` launch those engines; anything else uses bundled Chromium.
    #[tracing::instrument(skip(config), fields(browser = %config.browser, headless = config.headless))]
    pub async fn launch(config: &FlowConfig) -> Result<Self> {
        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("starting Playwright driver"))?;

        let browser = {
            let browser_type = match config.browser {
                BrowserName::Firefox => playwright.firefox(),
                BrowserName::Webkit => playwright.webkit(),
                BrowserName::Chrome | BrowserName::Chromium => playwright.chromium(),
            };
            browser_type
                .launch_with_options(launch_options(config))
                .await
                .map_err(|e| Error::from(e).context(format!("launching {}", config.browser)))?
        };

        let context = browser.new_context().await?;
        let page = context.new_page().await?;

        tracing::info!(version = browser.version(), "Browser session ready");

        Ok(Self {
            playwright,
            browser,
            context,
            page,
        })
    }

    /// The underlying Playwright page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Closes the context, the browser and the driver, in that order.
    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        tracing::debug!("Browser session closed");
        Ok(())
    }

    async fn locator(&self, selector: &Selector) -> playwright_rs::Locator {
        self.page.locator(selector.as_str()).await
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("browser", &self.browser.name())
            .field("url", &self.page.url())
            .finish()
    }
}

fn launch_options(config: &FlowConfig) -> LaunchOptions {
    let options = LaunchOptions::new().headless(config.headless);
    match config.browser {
        BrowserName::Chrome => options.channel("chrome".to_string()),
        _ => options,
    }
}

/// Sorts a Playwright failure into the element-not-found class when it is a
/// failed wait on `selector`.
fn classify(selector: &Selector, err: playwright_rs::Error) -> Error {
    match err {
        playwright_rs::Error::Timeout(detail)
        | playwright_rs::Error::AssertionTimeout(detail)
        | playwright_rs::Error::ElementNotFound(detail) => Error::ElementNotFound {
            selector: selector.to_string(),
            detail,
        },
        other => Error::Browser(other),
    }
}

impl Surface for BrowserSession {
    async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!(url, "goto");
        self.page.goto(url, None).await?;
        Ok(())
    }

    async fn fill(&self, selector: &Selector, value: &str) -> Result<()> {
        self.locator(selector)
            .await
            .fill(value, None)
            .await
            .map_err(|e| classify(selector, e))
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        tracing::debug!(%selector, "click");
        self.locator(selector)
            .await
            .click(None)
            .await
            .map_err(|e| classify(selector, e))
    }

    async fn wait_for(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
        let locator = self.locator(selector).await;
        expect(locator)
            .with_timeout(timeout.unwrap_or(DEFAULT_WAIT))
            .to_be_visible()
            .await
            .map_err(|e| classify(selector, e))
    }

    async fn reload(&self) -> Result<()> {
        tracing::debug!(url = %self.page.url(), "reload");
        self.page.reload(None).await?;
        Ok(())
    }

    async fn expect_text(&self, selector: &Selector, expected: &str) -> Result<()> {
        let locator = self.locator(selector).await;
        expect(locator)
            .to_contain_text(expected)
            .await
            .map_err(|e| match e {
                playwright_rs::Error::AssertionTimeout(message) => Error::Assertion(message),
                other => classify(selector, other),
            })
    }
}
