//! Seam between the storefront logic and the browser.
//!
//! Everything above this module talks to the page only through
//! [`AutomationDriver`]; waiting for elements to appear is the driver's
//! implicit-wait policy, not the caller's concern.

pub mod web;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::DriverError;
use async_trait::async_trait;

/// Element lookup and interaction against one browser session
#[async_trait]
pub trait AutomationDriver: Send + Sync {
    /// Handle to a located element
    type Element: Send + Sync;

    /// Navigate the session to a URL
    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// First element matching a CSS selector, `None` when nothing matches
    async fn locate(&self, selector: &str) -> Result<Option<Self::Element>, DriverError>;

    /// Every element matching a CSS selector, in document order
    async fn locate_all(&self, selector: &str) -> Result<Vec<Self::Element>, DriverError>;

    /// Visible text of an element
    async fn text(&self, element: &Self::Element) -> Result<String, DriverError>;

    async fn attribute(
        &self,
        element: &Self::Element,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    async fn click(&self, element: &Self::Element) -> Result<(), DriverError>;

    async fn send_keys(&self, element: &Self::Element, text: &str) -> Result<(), DriverError>;

    async fn clear(&self, element: &Self::Element) -> Result<(), DriverError>;

    /// Submit the form an input belongs to
    async fn submit(&self, element: &Self::Element) -> Result<(), DriverError>;

    async fn is_displayed(&self, element: &Self::Element) -> Result<bool, DriverError>;
}
