use crate::config::SelectorConfig;
use crate::driver::AutomationDriver;
use crate::error::{StorefrontError, StorefrontResult};
use crate::parsers::{label, number};
use std::collections::BTreeSet;

/// Reads and drives the pagination control of a search result set.
///
/// Holds no copy of the current page; every accessor reads the page again,
/// so results stay correct across navigation and new searches.
pub struct Navigator<'a, D: AutomationDriver> {
    driver: &'a D,
    selectors: &'a SelectorConfig,
}

impl<'a, D: AutomationDriver> Navigator<'a, D> {
    pub fn new(driver: &'a D, selectors: &'a SelectorConfig) -> Self {
        Self { driver, selectors }
    }

    /// Page numbers offered by the pagination control.
    ///
    /// Empty when there is no pagination control. Decorative entries such as
    /// "next page" are skipped; an entry whose label ends in a malformed number
    /// fails the whole discovery.
    pub async fn discover_page_numbers(&self) -> StorefrontResult<BTreeSet<u32>> {
        let attribute = &self.selectors.page_label_attribute;
        let mut pages = BTreeSet::new();

        for entry in self.driver.locate_all(&self.selectors.page_links).await? {
            let Some(text) = self.driver.attribute(&entry, attribute).await? else {
                ::log::trace!("Pagination entry without {} skipped", attribute);
                continue;
            };
            if let Some(page) = label::trailing_page_number(&text)? {
                pages.insert(page);
            }
        }

        ::log::debug!("Discovered result pages {:?}", pages);
        Ok(pages)
    }

    /// Page currently shown, `None` when the result set has no page info
    pub async fn current_page(&self) -> StorefrontResult<Option<u32>> {
        self.read_page_label(&self.selectors.current_page).await
    }

    /// Highest result page, `None` when the result set has no page info
    pub async fn last_page(&self) -> StorefrontResult<Option<u32>> {
        self.read_page_label(&self.selectors.last_page).await
    }

    async fn read_page_label(&self, selector: &str) -> StorefrontResult<Option<u32>> {
        let Some(element) = self.driver.locate(selector).await? else {
            ::log::debug!("Page label not present: {}", selector);
            return Ok(None);
        };

        let text = self.driver.text(&element).await?;
        // Page numbers start at 1
        match u32::try_from(number::parse_integer(&text)?) {
            Ok(0) | Err(_) => Err(StorefrontError::parse_failure(text)),
            Ok(page) => Ok(Some(page)),
        }
    }

    /// Clicks the "next" control.
    ///
    /// Returns `false` without navigating when the control is not on the page.
    pub async fn goto_next_page(&self) -> StorefrontResult<bool> {
        let Some(next) = self.driver.locate(&self.selectors.next_page).await? else {
            ::log::warn!("Next page control not found: {}", self.selectors.next_page);
            return Ok(false);
        };

        ::log::info!("Going to next result page");
        self.driver.click(&next).await?;
        Ok(true)
    }

    /// Navigates to a result page offered by the pagination control.
    ///
    /// A page outside [`discover_page_numbers`](Self::discover_page_numbers)
    /// fails with [`StorefrontError::PageNotFound`] and nothing is clicked.
    pub async fn goto_page(&self, page: u32) -> StorefrontResult<()> {
        let available = self.discover_page_numbers().await?;
        if !available.contains(&page) {
            ::log::error!("Page number {} is not in {:?}", page, available);
            return Err(StorefrontError::PageNotFound {
                page,
                available: available.into_iter().collect(),
            });
        }

        let attribute = &self.selectors.page_label_attribute;
        for entry in self.driver.locate_all(&self.selectors.page_links).await? {
            let Some(text) = self.driver.attribute(&entry, attribute).await? else {
                continue;
            };
            if label::names_page(&text, page) {
                ::log::info!("Going to result page {}", page);
                self.driver.click(&entry).await?;
                return Ok(());
            }
        }

        Err(StorefrontError::absent(format!(
            "{} labelled \"page {}\"",
            self.selectors.page_links, page
        )))
    }
}
