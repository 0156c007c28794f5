use crate::config::SelectorConfig;
use crate::driver::AutomationDriver;
use crate::error::StorefrontResult;
use crate::navigator::Navigator;
use crate::results::KeywordAudit;

/// Walks every result page and collects titles that lack a keyword
pub struct KeywordAuditor<'a, D: AutomationDriver> {
    driver: &'a D,
    selectors: &'a SelectorConfig,
    navigator: Navigator<'a, D>,
}

impl<'a, D: AutomationDriver> KeywordAuditor<'a, D> {
    pub fn new(driver: &'a D, selectors: &'a SelectorConfig) -> Self {
        Self {
            driver,
            selectors,
            navigator: Navigator::new(driver, selectors),
        }
    }

    /// Audits the result set starting from the page currently shown.
    ///
    /// The page count is read once up front and the traversal makes exactly
    /// that many passes, clicking "next" after each one. When the count is
    /// unavailable no page is audited and the result is inconclusive.
    /// Matching is a case-insensitive substring test ("table" matches "Worktable").
    pub async fn audit_missing_keyword(&self, keyword: &str) -> StorefrontResult<KeywordAudit> {
        let pages_expected = self.navigator.last_page().await?;
        let total_pages = pages_expected.unwrap_or(0);
        let needle = keyword.to_lowercase();

        let mut audit = KeywordAudit {
            keyword: keyword.to_string(),
            pages_expected,
            pages_audited: 0,
            titles_checked: 0,
            missing_titles: Vec::new(),
        };

        for page in 1..=total_pages {
            ::log::debug!("Auditing result page {} of {}", page, total_pages);
            self.check_visible_titles(&needle, &mut audit).await?;
            audit.pages_audited += 1;
            self.navigator.goto_next_page().await?;
        }

        if !audit.is_conclusive() {
            ::log::warn!("Keyword audit for {:?} is inconclusive: page count unavailable", keyword);
        } else if audit.missing_titles.is_empty() {
            ::log::info!("No titles missing the keyword {:?}", keyword);
        } else {
            ::log::info!(
                "{} of {} titles are missing the keyword {:?}",
                audit.missing_titles.len(),
                audit.titles_checked,
                keyword
            );
        }

        Ok(audit)
    }

    async fn check_visible_titles(
        &self,
        needle: &str,
        audit: &mut KeywordAudit,
    ) -> StorefrontResult<()> {
        for element in self.driver.locate_all(&self.selectors.item_titles).await? {
            let title = self.driver.text(&element).await?;
            audit.titles_checked += 1;

            if title.to_lowercase().contains(needle) {
                ::log::trace!("Keyword present: {}", title);
            } else {
                ::log::debug!("Keyword missing: {}", title);
                audit.missing_titles.push(title);
            }
        }
        Ok(())
    }
}
