use thiserror::Error;

/// Result type used across the storefront API
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Failures reported by an automation driver
#[derive(Debug, Error)]
pub enum DriverError {
    /// No WebDriver server accepted a new session
    #[error("failed to connect to WebDriver at {url}: {message}")]
    Connect {
        /// URL that was tried last
        url: String,
        /// Error message
        message: String,
    },

    /// A WebDriver command failed for a reason other than a missing element
    #[error("webdriver command failed: {0}")]
    Command(String),
}

/// Errors surfaced by the storefront operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A control that the operation cannot do without is not on the page
    #[error("element not found: {selector}")]
    ElementAbsent {
        /// Selector that matched nothing
        selector: String,
    },

    /// Label text did not contain a readable integer
    #[error("could not parse an integer from {text:?}")]
    ParseFailure {
        /// Raw label text
        text: String,
    },

    /// Requested result page is not offered by the pagination control
    #[error("page {page} is not one of the available result pages {available:?}")]
    PageNotFound {
        /// Requested page
        page: u32,
        /// Pages the pagination control does offer
        available: Vec<u32>,
    },

    #[error("automation driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl StorefrontError {
    pub(crate) fn parse_failure(text: impl Into<String>) -> Self {
        Self::ParseFailure { text: text.into() }
    }

    pub(crate) fn absent(selector: impl Into<String>) -> Self {
        Self::ElementAbsent {
            selector: selector.into(),
        }
    }
}
