//! End-to-end runs against a live storefront session.
//!
//! Checks are soft: a failed check is recorded and the run continues. An
//! operation error ends the run and is kept on the report.

use crate::driver::AutomationDriver;
use crate::error::StorefrontResult;
use crate::results::{Presence, ScenarioReport};
use crate::storefront::SearchPage;

/// Searches for `query` and checks that every result title contains `keyword`
pub async fn keyword_audit<D: AutomationDriver>(
    page: &SearchPage<'_, D>,
    query: &str,
    keyword: &str,
) -> ScenarioReport {
    let mut report = ScenarioReport::new("keyword_audit");
    if let Err(e) = run_keyword_audit(page, query, keyword, &mut report).await {
        ::log::error!("Keyword audit scenario aborted: {}", e);
        report.error = Some(e.to_string());
    }
    report
}

async fn run_keyword_audit<D: AutomationDriver>(
    page: &SearchPage<'_, D>,
    query: &str,
    keyword: &str,
    report: &mut ScenarioReport,
) -> StorefrontResult<()> {
    ::log::info!("*** Start of keyword audit for {:?} ***", keyword);

    let searched = page.search_for_product(query).await?;
    report.check_eq("search box is present", true, searched);
    if !searched {
        return Ok(());
    }

    ::log::info!("Search result count -> {:?}", page.search_result_count().await?);
    ::log::info!("Page count -> {:?}", page.search_page_count().await?);

    let audit = page.audit_missing_keyword(keyword).await?;
    ::log::info!(
        "Titles missing the keyword {:?} -> {}",
        keyword,
        audit.missing_titles.len()
    );
    ::log::info!("Page number -> {:?}", page.current_search_page_number().await?);

    report.check_eq("every result page was audited", true, audit.is_conclusive());
    report.check_eq(
        "all titles contain the keyword",
        Vec::<String>::new(),
        audit.missing_titles,
    );
    Ok(())
}

/// Adds an item from the last result page to the cart, then empties the cart.
///
/// `item` is a 1-based listing position; the last item on the page when `None`.
pub async fn cart_transaction<D: AutomationDriver>(
    page: &SearchPage<'_, D>,
    query: &str,
    item: Option<usize>,
) -> ScenarioReport {
    let mut report = ScenarioReport::new("cart_transaction");
    if let Err(e) = run_cart_transaction(page, query, item, &mut report).await {
        ::log::error!("Cart transaction scenario aborted: {}", e);
        report.error = Some(e.to_string());
    }
    report
}

async fn run_cart_transaction<D: AutomationDriver>(
    page: &SearchPage<'_, D>,
    query: &str,
    item: Option<usize>,
    report: &mut ScenarioReport,
) -> StorefrontResult<()> {
    ::log::info!("*** Start of cart transaction ***");

    page.clear_search_box().await?;
    let searched = page.search_for_product(query).await?;
    report.check_eq("search box is present", true, searched);
    if !searched {
        return Ok(());
    }

    ::log::info!("Before page -> {:?}", page.current_search_page_number().await?);
    let pages = page.page_numbers().await?;
    ::log::info!("Page numbers: {:?}", pages);
    if let Some(&last) = pages.last() {
        page.goto_result_page(last).await?;
    }
    ::log::info!("After page -> {:?}", page.current_search_page_number().await?);

    let item_count = page.page_item_count().await?;
    ::log::info!("Page item count -> {}", item_count);
    let index = item.unwrap_or(item_count);

    let listed = page.search_item_description(index).await?;
    ::log::info!("Page item description -> {:?}", listed);
    report.check_eq("chosen item is listed", true, listed.is_some());

    let added = page.add_item_to_cart(index).await?;
    report.check_eq("add to cart control is present", true, added);

    let opened = page.goto_cart_page().await?;
    report.check_eq("cart control is present", true, opened);

    let in_cart = page.cart_item_description(0).await?;
    ::log::info!("Cart item description -> {:?}", in_cart);
    report.check_eq("expected item is in the cart", listed, in_cart);

    let indicator = page.cart_non_empty_indicator().await?;
    report.check_eq("cart is not empty", Presence::Displayed, indicator);

    page.click_empty_cart().await?;
    let confirmed = page.confirm_empty_cart().await?;
    report.check_eq("empty cart confirmation is present", true, confirmed);

    let empty_screen = page.cart_empty_screen().await?;
    report.check_eq("cart is empty", Presence::Displayed, empty_screen);
    Ok(())
}
