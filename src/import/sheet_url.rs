//! Shared spreadsheet links to CSV export links.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::SHEET_EXPORT_BASE;

static SHEET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spreadsheets/d/([A-Za-z0-9_-]+)").expect("valid sheet id pattern"));

/// Rewrite a shared sheet URL to its CSV export URL.
///
/// Anything without a `spreadsheets/d/<id>` segment is returned unchanged and
/// treated as a direct CSV link.
pub fn normalize_sheet_url(url: &str) -> String {
    match SHEET_ID.captures(url).and_then(|caps| caps.get(1)) {
        Some(id) => format!("{}/{}/export?format=csv", SHEET_EXPORT_BASE, id.as_str()),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_link_rewritten() {
        assert_eq!(
            normalize_sheet_url("https://docs.google.com/spreadsheets/d/1AbC-d_9/edit#gid=0"),
            "https://docs.google.com/spreadsheets/d/1AbC-d_9/export?format=csv"
        );
    }

    #[test]
    fn test_query_and_extra_path_discarded() {
        assert_eq!(
            normalize_sheet_url("https://docs.google.com/spreadsheets/d/XYZ/htmlview?usp=sharing&x=1"),
            "https://docs.google.com/spreadsheets/d/XYZ/export?format=csv"
        );
    }

    #[test]
    fn test_id_stops_at_first_other_character() {
        assert_eq!(
            normalize_sheet_url("spreadsheets/d/abc.def"),
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
        );
    }

    #[test]
    fn test_non_matching_unchanged() {
        let url = "https://example.com/cards.csv";
        assert_eq!(normalize_sheet_url(url), url);
        assert_eq!(normalize_sheet_url(""), "");
        assert_eq!(normalize_sheet_url("spreadsheets/d/"), "spreadsheets/d/");
    }

    #[test]
    fn test_already_normalized_is_stable() {
        let url = "https://docs.google.com/spreadsheets/d/abc/export?format=csv";
        assert_eq!(normalize_sheet_url(url), url);
    }
}
