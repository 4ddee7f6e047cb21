//! # URL Helpers (`common::network::url`)
//!
//! File: cli/src/common/network/url.rs
//!
//! Cache-busting for URLs handed to browsers or reload clients.

/// # Append Timestamp (`append_timestamp`)
///
/// Appends `t=<timestamp>` as a query parameter, joined with `&` when the URL
/// already contains a `?` and with `?` otherwise. The URL is not validated.
pub fn append_timestamp(url: &str, timestamp: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, timestamp)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_timestamp_without_query() {
        assert_eq!(append_timestamp("http://x/y", 5), "http://x/y?t=5");
    }

    #[test]
    fn test_append_timestamp_with_query() {
        assert_eq!(append_timestamp("http://x/y?a=1", 5), "http://x/y?a=1&t=5");
    }

    #[test]
    fn test_append_timestamp_only_checks_for_question_mark() {
        // Not a URL at all, still total.
        assert_eq!(append_timestamp("", 0), "?t=0");
        assert_eq!(append_timestamp("/main.js?", 1700000000000), "/main.js?&t=1700000000000");
        assert_eq!(append_timestamp("/a#frag", -3), "/a#frag?t=-3");
    }
}
