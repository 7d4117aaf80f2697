// Login page - the landing screen of the client application

use crate::config::FlowConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::pages::{DashboardPage, orders_button};
use crate::selector::Selector;
use crate::surface::Surface;

/// Placeholder of the email input
pub const EMAIL_PLACEHOLDER: &str = "email@example.com";

/// Placeholder of the password input, spelled the way the application spells it
pub const PASSWORD_PLACEHOLDER: &str = "enter your passsword";

/// Landing screen: email/password form and the "Login" button.
#[derive(Debug)]
pub struct LoginPage<S: Surface> {
    session: S,
    client_url: String,
}

impl<S: Surface> LoginPage<S> {
    pub fn new(session: S, config: &FlowConfig) -> Self {
        Self {
            session,
            client_url: config.client_url.clone(),
        }
    }

    /// Opens the client application.
    pub async fn navigate(&self) -> Result<()> {
        self.session.goto(&self.client_url).await
    }

    /// Signs in, presses "ORDERS" and hands over to the dashboard.
    #[tracing::instrument(skip(self, credentials), fields(user = credentials.username()))]
    pub async fn login(self, credentials: &Credentials) -> Result<DashboardPage<S>> {
        self.session
            .fill(&Selector::placeholder(EMAIL_PLACEHOLDER), credentials.username())
            .await?;
        self.session
            .fill(
                &Selector::placeholder(PASSWORD_PLACEHOLDER),
                credentials.password(),
            )
            .await?;
        self.session.click(&Selector::role("button", "Login")).await?;
        self.session.click(&orders_button()).await?;

        tracing::info!("Logged in");
        Ok(DashboardPage::new(self.session))
    }
}
