use crate::config::SelectorConfig;
use crate::driver::AutomationDriver;
use crate::error::StorefrontResult;
use crate::results::Presence;

/// Adds listed items to the cart and empties it again.
///
/// Keeps no record of what is in the cart; success of every step is judged by
/// reading the page afterwards. None of the actions retry.
pub struct CartController<'a, D: AutomationDriver> {
    driver: &'a D,
    selectors: &'a SelectorConfig,
}

impl<'a, D: AutomationDriver> CartController<'a, D> {
    pub fn new(driver: &'a D, selectors: &'a SelectorConfig) -> Self {
        Self { driver, selectors }
    }

    /// Number of items listed on the current result page
    pub async fn item_count(&self) -> StorefrontResult<usize> {
        let items = self.driver.locate_all(&self.selectors.listing_items).await?;
        Ok(items.len())
    }

    /// Description of the item at a 1-based position on the current page
    pub async fn item_description(&self, index: usize) -> StorefrontResult<Option<String>> {
        if index == 0 {
            ::log::warn!("Listing positions start at 1");
            return Ok(None);
        }
        self.read_text(&self.selectors.item_description_at(index))
            .await
    }

    /// Clicks the add-to-cart control of the item at a 1-based position
    pub async fn add_item_to_cart(&self, index: usize) -> StorefrontResult<bool> {
        if index == 0 {
            ::log::warn!("Listing positions start at 1");
            return Ok(false);
        }
        ::log::info!("Adding item {} to the cart", index);
        self.click(&self.selectors.add_to_cart_at(index)).await
    }

    pub async fn open_cart(&self) -> StorefrontResult<bool> {
        ::log::info!("Opening cart");
        self.click(&self.selectors.open_cart).await
    }

    /// Description of a cart line by 0-based position, `None` when out of range
    pub async fn cart_item_description(&self, index: usize) -> StorefrontResult<Option<String>> {
        let lines = self
            .driver
            .locate_all(&self.selectors.cart_item_descriptions)
            .await?;

        match lines.get(index) {
            Some(line) => Ok(Some(self.driver.text(line).await?)),
            None => {
                ::log::warn!(
                    "Cart line {} out of range, cart has {} lines",
                    index,
                    lines.len()
                );
                Ok(None)
            }
        }
    }

    /// First step of emptying the cart: surfaces the confirmation control
    pub async fn click_empty_cart(&self) -> StorefrontResult<bool> {
        ::log::info!("Clicking empty cart");
        self.click(&self.selectors.empty_cart).await
    }

    /// Second step of emptying the cart
    pub async fn confirm_empty_cart(&self) -> StorefrontResult<bool> {
        ::log::info!("Confirming empty cart");
        self.click(&self.selectors.confirm_empty_cart).await
    }

    /// The empty-cart control, only offered while the cart holds items
    pub async fn non_empty_indicator(&self) -> StorefrontResult<Presence> {
        self.presence_of(&self.selectors.empty_cart).await
    }

    /// The screen shown once the cart has been emptied
    pub async fn empty_cart_screen(&self) -> StorefrontResult<Presence> {
        self.presence_of(&self.selectors.empty_cart_screen).await
    }

    async fn read_text(&self, selector: &str) -> StorefrontResult<Option<String>> {
        match self.driver.locate(selector).await? {
            Some(element) => Ok(Some(self.driver.text(&element).await?)),
            None => {
                ::log::warn!("Nothing to read at {}", selector);
                Ok(None)
            }
        }
    }

    async fn click(&self, selector: &str) -> StorefrontResult<bool> {
        let Some(element) = self.driver.locate(selector).await? else {
            ::log::warn!("Control not found: {}", selector);
            return Ok(false);
        };
        self.driver.click(&element).await?;
        Ok(true)
    }

    async fn presence_of(&self, selector: &str) -> StorefrontResult<Presence> {
        let presence = match self.driver.locate(selector).await? {
            None => Presence::Absent,
            Some(element) => {
                if self.driver.is_displayed(&element).await? {
                    Presence::Displayed
                } else {
                    Presence::Hidden
                }
            }
        };
        ::log::debug!("{} is {:?}", selector, presence);
        Ok(presence)
    }
}
