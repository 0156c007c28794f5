use crate::audit::KeywordAuditor;
use crate::cart::CartController;
use crate::config::SelectorConfig;
use crate::driver::AutomationDriver;
use crate::error::StorefrontResult;
use crate::navigator::Navigator;
use crate::results::{KeywordAudit, Presence};
use crate::search::SearchBox;
use std::collections::BTreeSet;

/// Caller-facing API over the storefront search and cart pages.
///
/// Borrows the session for its whole life; every call is a fresh read or
/// action against the page.
pub struct SearchPage<'a, D: AutomationDriver> {
    search: SearchBox<'a, D>,
    navigator: Navigator<'a, D>,
    auditor: KeywordAuditor<'a, D>,
    cart: CartController<'a, D>,
}

impl<'a, D: AutomationDriver> SearchPage<'a, D> {
    pub fn new(driver: &'a D, selectors: &'a SelectorConfig) -> Self {
        Self {
            search: SearchBox::new(driver, selectors),
            navigator: Navigator::new(driver, selectors),
            auditor: KeywordAuditor::new(driver, selectors),
            cart: CartController::new(driver, selectors),
        }
    }

    pub async fn search_for_product(&self, product_name: &str) -> StorefrontResult<bool> {
        self.search.search_for_product(product_name).await
    }

    pub async fn clear_search_box(&self) -> StorefrontResult<bool> {
        self.search.clear_search_box().await
    }

    pub async fn search_result_count(&self) -> StorefrontResult<Option<u64>> {
        self.search.result_count().await
    }

    pub async fn search_page_count(&self) -> StorefrontResult<Option<u32>> {
        self.navigator.last_page().await
    }

    pub async fn current_search_page_number(&self) -> StorefrontResult<Option<u32>> {
        self.navigator.current_page().await
    }

    pub async fn page_numbers(&self) -> StorefrontResult<BTreeSet<u32>> {
        self.navigator.discover_page_numbers().await
    }

    pub async fn goto_result_page(&self, page: u32) -> StorefrontResult<()> {
        self.navigator.goto_page(page).await
    }

    pub async fn goto_next_result_page(&self) -> StorefrontResult<bool> {
        self.navigator.goto_next_page().await
    }

    pub async fn audit_missing_keyword(&self, keyword: &str) -> StorefrontResult<KeywordAudit> {
        self.auditor.audit_missing_keyword(keyword).await
    }

    pub async fn page_item_count(&self) -> StorefrontResult<usize> {
        self.cart.item_count().await
    }

    /// Description of a listed item, 1-based
    pub async fn search_item_description(&self, index: usize) -> StorefrontResult<Option<String>> {
        self.cart.item_description(index).await
    }

    /// Adds a listed item to the cart, 1-based
    pub async fn add_item_to_cart(&self, index: usize) -> StorefrontResult<bool> {
        self.cart.add_item_to_cart(index).await
    }

    pub async fn goto_cart_page(&self) -> StorefrontResult<bool> {
        self.cart.open_cart().await
    }

    /// Description of a cart line, 0-based
    pub async fn cart_item_description(&self, index: usize) -> StorefrontResult<Option<String>> {
        self.cart.cart_item_description(index).await
    }

    pub async fn click_empty_cart(&self) -> StorefrontResult<bool> {
        self.cart.click_empty_cart().await
    }

    pub async fn confirm_empty_cart(&self) -> StorefrontResult<bool> {
        self.cart.confirm_empty_cart().await
    }

    pub async fn cart_non_empty_indicator(&self) -> StorefrontResult<Presence> {
        self.cart.non_empty_indicator().await
    }

    pub async fn cart_empty_screen(&self) -> StorefrontResult<Presence> {
        self.cart.empty_cart_screen().await
    }
}
