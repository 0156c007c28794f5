use crate::error::{StorefrontError, StorefrontResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Placeholder substituted by the 1-based item position in indexed selectors
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Configuration for a storefront audit session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Storefront home page opened at the start of a session
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Implicit wait applied to every element lookup, in seconds
    #[serde(default = "default_implicit_wait_secs")]
    pub implicit_wait_secs: u64,

    /// Whether to maximize the browser window after connecting
    #[serde(default = "default_maximize_window")]
    pub maximize_window: bool,

    /// Product query typed into the search box
    #[serde(default = "default_search_term")]
    pub search_term: String,

    /// Keyword every result title is expected to contain
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// CSS selectors for the storefront controls
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// CSS selectors used to locate storefront controls.
///
/// Selectors containing `{index}` are templates filled with a 1-based item position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub search_box: String,
    pub result_header: String,
    pub current_page: String,
    pub last_page: String,
    pub next_page: String,
    pub page_links: String,
    /// Attribute holding a pagination entry's accessible description
    pub page_label_attribute: String,
    pub listing_items: String,
    pub item_titles: String,
    pub item_description: String,
    pub add_to_cart: String,
    pub open_cart: String,
    pub cart_item_descriptions: String,
    pub empty_cart: String,
    pub confirm_empty_cart: String,
    pub empty_cart_screen: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            search_box: "input[name='searchval']".to_string(),
            result_header: "h1.search--title".to_string(),
            current_page: "#paging li a[aria-label*='current page']".to_string(),
            last_page: "#paging li a[aria-label*='last page']".to_string(),
            next_page: "#paging ul li:last-child a".to_string(),
            page_links: "#paging ul li a".to_string(),
            page_label_attribute: "aria-label".to_string(),
            listing_items: "#product_listing > div".to_string(),
            item_titles: "#product_listing span[data-testid='itemDescription']".to_string(),
            item_description:
                "#product_listing > div:nth-of-type({index}) span[data-testid='itemDescription']"
                    .to_string(),
            add_to_cart: "#product_listing > div:nth-of-type({index}) input[type='submit']"
                .to_string(),
            open_cart: "a[aria-label*='Your cart']".to_string(),
            cart_item_descriptions: ".cartItems li[data-cart-item-id] span.itemDescription a"
                .to_string(),
            empty_cart: ".cartItems button.emptyCartButton".to_string(),
            confirm_empty_cart: "footer > button:first-of-type".to_string(),
            empty_cart_screen: "div.empty-cart__inner".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Description selector for the item at a 1-based listing position
    pub fn item_description_at(&self, index: usize) -> String {
        fill_index(&self.item_description, index)
    }

    /// Add-to-cart selector for the item at a 1-based listing position
    pub fn add_to_cart_at(&self, index: usize) -> String {
        fill_index(&self.add_to_cart, index)
    }

    fn validate(&self) -> StorefrontResult<()> {
        for (name, template) in [
            ("item_description", &self.item_description),
            ("add_to_cart", &self.add_to_cart),
        ] {
            if !template.contains(INDEX_PLACEHOLDER) {
                return Err(StorefrontError::Config(format!(
                    "selector `{}` must contain the {} placeholder",
                    name, INDEX_PLACEHOLDER
                )));
            }
        }
        Ok(())
    }
}

fn fill_index(template: &str, index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &index.to_string())
}

/// Default value for base_url
fn default_base_url() -> String {
    "https://www.webstaurantstore.com/".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_implicit_wait_secs() -> u64 {
    10
}

fn default_maximize_window() -> bool {
    true
}

fn default_search_term() -> String {
    "stainless steel table".to_string()
}

fn default_keyword() -> String {
    "table".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            implicit_wait_secs: default_implicit_wait_secs(),
            maximize_window: default_maximize_window(),
            search_term: default_search_term(),
            keyword: default_keyword(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> StorefrontResult<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> StorefrontResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if provided
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            self.apply_webdriver_override(&webdriver_url);
        }
        self
    }

    fn apply_webdriver_override(&mut self, webdriver_url: &str) {
        if !webdriver_url.is_empty() {
            ::log::debug!("Using WebDriver URL override: {}", webdriver_url);
            self.webdriver_url = webdriver_url.to_string();
        }
    }

    /// Check URLs and selector templates before a session is opened
    pub fn validate(&self) -> StorefrontResult<()> {
        for (name, value) in [
            ("base_url", &self.base_url),
            ("webdriver_url", &self.webdriver_url),
        ] {
            Url::parse(value).map_err(|e| {
                StorefrontError::Config(format!("{} {:?} is not a valid URL: {}", name, value, e))
            })?;
        }
        self.selectors.validate()
    }
}
