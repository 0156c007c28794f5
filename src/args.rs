use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_audit::StorefrontConfig;

#[derive(Parser, Debug)]
#[command(name = "storefront-audit")]
#[command(about = "Audits storefront search results and verifies cart operations")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storefront home page
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// WebDriver server URL (overrides WEBDRIVER_URL)
    #[arg(long, global = true)]
    pub webdriver_url: Option<String>,

    /// Implicit wait for element lookups, in seconds
    #[arg(long, global = true)]
    pub implicit_wait: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that every search result title contains a keyword
    Audit {
        /// Product query (defaults to the configured search term)
        #[arg(short, long)]
        query: Option<String>,

        /// Keyword every title must contain (defaults to the configured keyword)
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Add an item from the last result page to the cart, then empty the cart
    Cart {
        /// Product query (defaults to the configured search term)
        #[arg(short, long)]
        query: Option<String>,

        /// 1-based item position on the last page (defaults to the last item)
        #[arg(short, long)]
        item: Option<usize>,
    },

    /// Run the keyword audit followed by the cart transaction
    Run,
}

impl Args {
    /// Builds the effective configuration: file, then environment, then flags
    pub fn load_config(&self) -> storefront_audit::StorefrontResult<StorefrontConfig> {
        let config = match &self.config {
            Some(path) => StorefrontConfig::from_file(path)?,
            None => StorefrontConfig::default(),
        };
        let mut config = config.with_env_overrides();

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }
        if let Some(wait) = self.implicit_wait {
            config.implicit_wait_secs = wait;
        }

        config.validate()?;
        Ok(config)
    }
}
