use crate::error::{StorefrontError, StorefrontResult};
use regex::Regex;
use std::sync::LazyLock;

/// A run of digits, possibly split by commas; grouping is checked after matching
static NUMBER_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d+)*").expect("number pattern should be valid"));

/// Parses the integer a label reports.
///
/// Labels such as `"Showing 1-24 of 137 results"` carry several numbers; the
/// count is the last digit group, so that is the one returned. Thousands
/// separators inside the group are dropped; a group that is not grouped by
/// threes ("1,2345") is unreadable rather than guessed at.
pub fn parse_integer(text: &str) -> StorefrontResult<u64> {
    let group = NUMBER_GROUP
        .find_iter(text)
        .last()
        .ok_or_else(|| StorefrontError::parse_failure(text))?;

    let mut parts = group.as_str().split(',');
    let leading = parts.next().unwrap_or_default();
    let mut rest = parts.peekable();
    let grouped = rest.peek().is_some();
    if (grouped && leading.len() > 3) || rest.any(|part| part.len() != 3) {
        return Err(StorefrontError::parse_failure(text));
    }

    let digits: String = group.as_str().chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<u64>()
        .map_err(|_| StorefrontError::parse_failure(text))
}

/// Like [`parse_integer`] but falls back to `0` when nothing can be read.
///
/// `0` here means "unknown", never a confirmed zero count.
pub fn extract_integer(text: &str) -> u64 {
    match parse_integer(text) {
        Ok(value) => value,
        Err(e) => {
            ::log::warn!("Falling back to 0: {}", e);
            0
        }
    }
}
