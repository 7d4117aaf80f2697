// API helper - creates orders through the shop's HTTP API
//
// Two sequential calls, no retry and no token caching:
//   POST /api/ecom/auth/login          -> { "token": ... }
//   POST /api/ecom/order/create-order  -> { "orders": [ ... ] }

use crate::config::FlowConfig;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Login endpoint, relative to the API base URL
pub const LOGIN_PATH: &str = "/api/ecom/auth/login";

/// Order creation endpoint, relative to the API base URL
pub const CREATE_ORDER_PATH: &str = "/api/ecom/order/create-order";

/// Destination country of every order this helper places
pub const ORDER_COUNTRY: &str = "India";

/// Product every order this helper places contains
pub const ORDER_PRODUCT_ID: &str = "68a961459320a140fe1ca57a";

/// Identifier of an order, as returned by the create-order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Session token returned by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_email: &'a str,
    user_password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderLine<'a> {
    country: &'a str,
    product_ordered_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    orders: Vec<OrderLine<'a>>,
}

#[derive(Deserialize)]
struct CreateOrderResponse {
    #[serde(default)]
    orders: Vec<OrderRef>,
}

/// An entry of the `orders` array: the live API returns bare ids,
/// other deployments return order records.
#[derive(Deserialize)]
#[serde(untagged)]
enum OrderRef {
    Id(String),
    Record {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl OrderRef {
    fn into_id(self) -> String {
        match self {
            OrderRef::Id(id) | OrderRef::Record { id } => id,
        }
    }
}

/// Client for the shop's HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the configured API base URL.
    pub fn new(config: &FlowConfig) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), &config.api_base_url)
    }

    /// Creates a client that sends through an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("api_base_url '{}': {}", base_url, e)))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Logs in and returns a session token.
    ///
    /// Fails with [`Error::Http`] when the response is not successful.
    #[tracing::instrument(skip(self, credentials), fields(user = credentials.username()))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Token> {
        let request = LoginRequest {
            user_email: credentials.username(),
            user_password: credentials.password(),
        };
        let response: LoginResponse = self.post_json(LOGIN_PATH, &request, None).await?;
        Ok(Token(response.token))
    }

    /// Places the fixed order and returns the identifier of the first created order.
    ///
    /// Authenticates first, with a fresh token on every call. Any failure of
    /// either request aborts the whole operation.
    #[tracing::instrument(skip(self, credentials), fields(user = credentials.username()))]
    pub async fn create_order(&self, credentials: &Credentials) -> Result<OrderId> {
        let token = self.authenticate(credentials).await?;

        let request = CreateOrderRequest {
            orders: vec![OrderLine {
                country: ORDER_COUNTRY,
                product_ordered_id: ORDER_PRODUCT_ID,
            }],
        };
        let response: CreateOrderResponse = self
            .post_json(CREATE_ORDER_PATH, &request, Some(&token))
            .await?;

        let order_id = response
            .orders
            .into_iter()
            .next()
            .map(OrderRef::into_id)
            .filter(|id| !id.is_empty())
            .map(OrderId)
            .ok_or_else(|| {
                Error::UnexpectedResponse(format!("{} returned no orders", CREATE_ORDER_PATH))
            })?;

        tracing::info!(order_id = %order_id, "Order created");
        Ok(order_id)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("endpoint '{}': {}", path, e)))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&Token>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;

        let mut request = self.http.post(url.clone()).json(body);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body: text,
            });
        }

        tracing::debug!(%url, body = %text, "API response");

        serde_json::from_str(&text)
            .map_err(|e| Error::UnexpectedResponse(format!("{}: {}", path, e)))
    }
}
