use crate::error::{StorefrontError, StorefrontResult};

/// Reads the page number a pagination label ends with.
///
/// The number is the last whitespace-separated token (`"current page, page 2"` -> 2).
/// Decorative entries whose last token has no digits at all (`"next page"`) yield
/// `None`. A last token that mixes digits with other characters, is zero, or does
/// not fit a `u32` is a malformed label.
pub fn trailing_page_number(label: &str) -> StorefrontResult<Option<u32>> {
    let Some(token) = label.split_whitespace().last() else {
        return Ok(None);
    };

    if !token.chars().any(|c| c.is_ascii_digit()) {
        ::log::trace!("Skipping decorative pagination label {:?}", label);
        return Ok(None);
    }

    match token.parse::<u32>() {
        Ok(0) | Err(_) => Err(StorefrontError::parse_failure(label)),
        Ok(page) => Ok(Some(page)),
    }
}

/// Whether a pagination label is the link for `page`
pub fn names_page(label: &str, page: u32) -> bool {
    label.contains(&format!("page {}", page))
        && matches!(trailing_page_number(label), Ok(Some(n)) if n == page)
}
