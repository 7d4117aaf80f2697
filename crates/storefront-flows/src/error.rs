// Error types for storefront-flows

use thiserror::Error;

/// Result type alias for storefront-flows operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the storefront flows
#[derive(Debug, Error)]
pub enum Error {
    /// Element could not be located on the current screen
    ///
    /// Raised by the UI layer when a wait or an action cannot find its target.
    /// The order lookup recovers from this exactly once by reloading the view.
    #[error("Element not found: selector '{selector}'. {detail}")]
    ElementNotFound { selector: String, detail: String },

    /// A verification step did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// HTTP response was not successful
    ///
    /// Never retried. Carries the response status and body for diagnosis.
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    /// HTTP transport failure (connection refused, TLS, decode)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Browser-layer failure other than a missing element
    #[error("Browser error: {0}")]
    Browser(#[from] playwright_rs::Error),

    /// Credentials source could not be read or was malformed
    #[error("Invalid credentials source: {0}")]
    Credentials(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Returns true if this error (or the error it wraps) is an element-not-found fault.
    pub fn is_element_not_found(&self) -> bool {
        match self {
            Error::ElementNotFound { .. } => true,
            Error::Context(_, inner) => inner.is_element_not_found(),
            _ => false,
        }
    }

    /// Returns the HTTP status if this is an unsuccessful-response error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Context(_, inner) => inner.http_status(),
            _ => None,
        }
    }
}
