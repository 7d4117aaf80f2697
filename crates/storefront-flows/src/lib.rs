//! storefront-flows: page-object UI and API flows for the e-commerce client application
//!
//! The crate drives the client application through a forward-only chain of
//! page objects and creates orders through the shop's HTTP API:
//!
//! ```text
//! LoginPage --login--> DashboardPage --go_to_orders--> OrdersHistoryPage
//!     --select_order--> OrderSummaryPage
//! ```
//!
//! Page objects are generic over a [`Surface`], the live session handle.
//! [`BrowserSession`] is the Playwright-backed surface used against the real
//! application.
//!
//! # Examples
//!
//! ## Order transaction
//!
//! ```ignore
//! use storefront_flows::{ApiClient, BrowserSession, FlowConfig, LoginPage, credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FlowConfig::from_env()?;
//!     let users = credentials::load(&config.credentials_path).await?;
//!     let api = ApiClient::new(&config)?;
//!
//!     for user in &users {
//!         let order_id = api.create_order(user).await?;
//!
//!         let session = BrowserSession::launch(&config).await?;
//!         let login = LoginPage::new(session, &config);
//!         login.navigate().await?;
//!
//!         let dashboard = login.login(user).await?;
//!         let history = dashboard.go_to_orders().await?;
//!         let summary = history.select_order(&order_id).await?;
//!         summary.verify_order_placed().await?;
//!
//!         summary.into_session().close().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scenario helper
//!
//! ```ignore
//! use storefront_flows::{FlowConfig, credentials, scenario};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FlowConfig::from_env()?;
//!     for user in credentials::load(&config.credentials_path).await? {
//!         scenario::run(&config, &user).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod credentials;
mod error;
pub mod pages;
pub mod scenario;
pub mod selector;
mod surface;

// Re-export error types
pub use error::{Error, Result};

// Re-export configuration
pub use config::{BrowserName, FlowConfig};

// Re-export the session handle abstraction and its browser implementation
pub use browser::BrowserSession;
pub use surface::Surface;

// Re-export page objects
pub use pages::{DashboardPage, LoginPage, OrderSummaryPage, OrdersHistoryPage};

// Re-export API helper types
pub use api::{ApiClient, OrderId, Token};
pub use credentials::Credentials;
pub use selector::Selector;
