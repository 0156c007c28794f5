use crate::config::SelectorConfig;
use crate::driver::AutomationDriver;
use crate::error::StorefrontResult;
use crate::parsers::number;

/// Search box and result header of the storefront
pub struct SearchBox<'a, D: AutomationDriver> {
    driver: &'a D,
    selectors: &'a SelectorConfig,
}

impl<'a, D: AutomationDriver> SearchBox<'a, D> {
    pub fn new(driver: &'a D, selectors: &'a SelectorConfig) -> Self {
        Self { driver, selectors }
    }

    /// Types the product name into the search box and submits it.
    ///
    /// Returns `false` when the search box is not on the page.
    pub async fn search_for_product(&self, product_name: &str) -> StorefrontResult<bool> {
        let Some(search_box) = self.driver.locate(&self.selectors.search_box).await? else {
            ::log::warn!("Search box not found: {}", self.selectors.search_box);
            return Ok(false);
        };

        ::log::info!("Searching for {:?}", product_name);
        self.driver.send_keys(&search_box, product_name).await?;
        self.driver.submit(&search_box).await?;
        Ok(true)
    }

    /// Clears the search box, `false` when it is not on the page
    pub async fn clear_search_box(&self) -> StorefrontResult<bool> {
        let Some(search_box) = self.driver.locate(&self.selectors.search_box).await? else {
            ::log::warn!("Search box not found: {}", self.selectors.search_box);
            return Ok(false);
        };

        self.driver.clear(&search_box).await?;
        Ok(true)
    }

    /// Number of results announced by the search header.
    ///
    /// `None` when there is no header (no search has been run).
    pub async fn result_count(&self) -> StorefrontResult<Option<u64>> {
        let Some(header) = self.driver.locate(&self.selectors.result_header).await? else {
            ::log::warn!("Search header not found: {}", self.selectors.result_header);
            return Ok(None);
        };

        let text = self.driver.text(&header).await?;
        number::parse_integer(&text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::MockStorefront;

    #[tokio::test]
    async fn test_search_and_result_count() {
        let storefront = MockStorefront::new(&[&["Work Table", "Shelf"], &["Prep Table"]]);
        let selectors = SelectorConfig::default();
        let search = SearchBox::new(&storefront, &selectors);

        // No header before the first search
        assert_eq!(search.result_count().await.unwrap(), None);

        assert!(search.search_for_product("stainless table").await.unwrap());
        assert_eq!(storefront.submitted_queries(), vec!["stainless table"]);
        assert_eq!(search.result_count().await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_clear_before_new_search() {
        let storefront = MockStorefront::new(&[&["Work Table"]]);
        let selectors = SelectorConfig::default();
        let search = SearchBox::new(&storefront, &selectors);

        search.search_for_product("shelf").await.unwrap();
        assert!(search.clear_search_box().await.unwrap());
        search.search_for_product("table").await.unwrap();

        assert_eq!(storefront.submitted_queries(), vec!["shelf", "table"]);
    }

    #[tokio::test]
    async fn test_missing_search_box() {
        let storefront = MockStorefront::new(&[&["Work Table"]]);
        let selectors = SelectorConfig {
            search_box: "input[name='missing']".to_string(),
            ..SelectorConfig::default()
        };
        let search = SearchBox::new(&storefront, &selectors);

        assert!(!search.search_for_product("table").await.unwrap());
        assert!(!search.clear_search_box().await.unwrap());
        assert!(storefront.submitted_queries().is_empty());
    }
}
