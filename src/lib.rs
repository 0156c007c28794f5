// Re-export modules
pub mod audit;
pub mod cart;
pub mod config;
pub mod driver;
pub mod error;
pub mod navigator;
pub mod parsers;
pub mod results;
pub mod scenario;
pub mod search;
pub mod storefront;

// Re-export commonly used types for convenience
pub use config::{SelectorConfig, StorefrontConfig};
pub use driver::AutomationDriver;
pub use error::{DriverError, StorefrontError, StorefrontResult};
pub use results::{KeywordAudit, Presence, ScenarioReport};
pub use storefront::SearchPage;
