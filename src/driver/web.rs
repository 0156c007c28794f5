use crate::config::StorefrontConfig;
use crate::driver::AutomationDriver;
use crate::error::DriverError;
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::key::Key;
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::Duration;

/// Well-known local WebDriver endpoints tried when the configured one refuses
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// A WebDriver session driven through fantoccini
pub struct WebSession {
    client: Client,
}

impl WebSession {
    /// Connects to WebDriver, applies the implicit wait and opens the storefront
    pub async fn open(config: &StorefrontConfig) -> Result<Self, DriverError> {
        let client = connect_to_webdriver(&config.webdriver_url).await?;

        let implicit_wait = Duration::from_secs(config.implicit_wait_secs);
        client
            .update_timeouts(TimeoutConfiguration::new(None, None, Some(implicit_wait)))
            .await
            .map_err(command_error)?;
        ::log::debug!("Implicit wait set to {:?}", implicit_wait);

        if config.maximize_window {
            if let Err(e) = client.maximize_window().await {
                ::log::warn!("Failed to maximize browser window: {}", e);
            }
        }

        let session = Self { client };
        session.goto(&config.base_url).await?;
        Ok(session)
    }

    /// Ends the browser session
    pub async fn close(self) -> Result<(), DriverError> {
        self.client.close().await.map_err(command_error)
    }
}

/// Connects to the WebDriver instance, falling back to common local endpoints
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, DriverError> {
    let first_error = match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::info!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e.to_string()
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::info!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(DriverError::Connect {
        url: webdriver_url.to_string(),
        message: first_error,
    })
}

fn command_error(error: CmdError) -> DriverError {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("WebDriver session was lost");
    }
    DriverError::Command(error.to_string())
}

/// Maps a "no such element" reply to `None`; every other failure is an error
fn lookup<T>(result: Result<T, CmdError>) -> Result<Option<T>, DriverError> {
    match result {
        Ok(found) => Ok(Some(found)),
        Err(e) if e.is_no_such_element() => Ok(None),
        Err(e) => Err(command_error(e)),
    }
}

#[async_trait]
impl AutomationDriver for WebSession {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        ::log::info!("Navigating to {}", url);
        self.client.goto(url).await.map_err(command_error)
    }

    async fn locate(&self, selector: &str) -> Result<Option<Element>, DriverError> {
        let element = lookup(self.client.find(Locator::Css(selector)).await)?;
        if element.is_none() {
            ::log::debug!("No element matches {}", selector);
        }
        Ok(element)
    }

    async fn locate_all(&self, selector: &str) -> Result<Vec<Element>, DriverError> {
        let elements = lookup(self.client.find_all(Locator::Css(selector)).await)?;
        Ok(elements.unwrap_or_default())
    }

    async fn text(&self, element: &Element) -> Result<String, DriverError> {
        element.text().await.map_err(command_error)
    }

    async fn attribute(&self, element: &Element, name: &str) -> Result<Option<String>, DriverError> {
        element.attr(name).await.map_err(command_error)
    }

    async fn click(&self, element: &Element) -> Result<(), DriverError> {
        element.click().await.map_err(command_error)
    }

    async fn send_keys(&self, element: &Element, text: &str) -> Result<(), DriverError> {
        element.send_keys(text).await.map_err(command_error)
    }

    async fn clear(&self, element: &Element) -> Result<(), DriverError> {
        element.clear().await.map_err(command_error)
    }

    async fn submit(&self, element: &Element) -> Result<(), DriverError> {
        // Pressing Enter in a form field submits its form
        let enter: char = Key::Enter.into();
        element
            .send_keys(&enter.to_string())
            .await
            .map_err(command_error)
    }

    async fn is_displayed(&self, element: &Element) -> Result<bool, DriverError> {
        element.is_displayed().await.map_err(command_error)
    }
}
