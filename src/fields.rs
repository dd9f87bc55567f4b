//! Line-oriented field heuristics over scanned page content.
//!
//! Each function is a pure scan: pages in document order, lines in page
//! order, one flat output sequence. The rules reproduce the legacy
//! extraction script, so they are deliberately naive; see each function for
//! the exact quirk it preserves.

use crate::PageContent;
use regex::Regex;
use std::sync::OnceLock;

/// A word-character token immediately followed by a colon, e.g. `Ref:`.
fn colon_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+:").expect("colon token pattern is valid"))
}

/// A maximal digit run immediately preceded by a literal `": "`. The regex
/// crate has no lookbehind, so the prefix is consumed and the digits are
/// captured; the matches produced are the same.
fn quantity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r": (\d+)").expect("quantity pattern is valid"))
}

/// For every line containing a `Word:` token, emit the *preceding* line.
///
/// This is how the supplier reference (and, fed twice, the designation) is
/// read from catalog layouts where a label line like `Ref:` sits directly
/// under the product name.
///
/// A match on the first line of a page has no preceding line and is
/// skipped — the scan never wraps around to the end of the page.
pub fn lines_above_colon_tokens(pages: &[PageContent]) -> Vec<String> {
    let re = colon_token_re();
    let mut out = Vec::new();
    for page in pages {
        let lines: Vec<&str> = page.lines().collect();
        for i in 1..lines.len() {
            if re.is_match(lines[i]) {
                out.push(lines[i - 1].to_string());
            }
        }
    }
    out
}

/// For every line containing a `-`, emit the trimmed remainder after the
/// first dash. Lines without a dash contribute nothing — they are skipped,
/// not represented by an empty string.
///
/// Feeds the colour column: catalog lines look like `WIDGET-Red`.
pub fn text_after_dash(pages: &[PageContent]) -> Vec<String> {
    let mut out = Vec::new();
    for page in pages {
        for line in page.lines() {
            if let Some((_, rest)) = line.split_once('-') {
                out.push(rest.trim().to_string());
            }
        }
    }
    out
}

/// Every maximal digit run immediately preceded by `": "`, across the whole
/// page text, in textual order. No line structure survives into the output;
/// it is one flat sequence of numeric strings feeding the quantity column.
pub fn quantities_after_colon(pages: &[PageContent]) -> Vec<String> {
    let re = quantity_re();
    let mut out = Vec::new();
    for page in pages {
        for caps in re.captures_iter(&page.text) {
            out.push(caps[1].to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(text: &str) -> PageContent {
        PageContent {
            page_number: 1,
            text: text.to_string(),
            images: Vec::new(),
        }
    }

    // ── lines_above_colon_tokens ─────────────────────────────────────────────

    #[test]
    fn emits_the_line_preceding_a_colon_token() {
        let pages = [page("WIDGET ALPHA\nRef: 123\nWIDGET BETA\nQty: 4")];
        assert_eq!(
            lines_above_colon_tokens(&pages),
            vec!["WIDGET ALPHA", "WIDGET BETA"]
        );
    }

    #[test]
    fn match_on_the_first_line_is_skipped_not_wrapped() {
        let pages = [page("Ref: 123\nlast line of page")];
        assert!(lines_above_colon_tokens(&pages).is_empty());
    }

    #[test]
    fn bare_colon_without_word_chars_does_not_match() {
        let pages = [page("product name\n: 5")];
        assert!(lines_above_colon_tokens(&pages).is_empty());
    }

    #[test]
    fn pages_are_scanned_in_order() {
        let pages = [page("A\nx: 1"), page("B\ny: 2")];
        assert_eq!(lines_above_colon_tokens(&pages), vec!["A", "B"]);
    }

    #[test]
    fn empty_page_text_yields_nothing() {
        assert!(lines_above_colon_tokens(&[page("")]).is_empty());
    }

    // ── text_after_dash ──────────────────────────────────────────────────────

    #[test]
    fn dashless_lines_contribute_no_entry() {
        let pages = [page("A-1\nB")];
        assert_eq!(text_after_dash(&pages), vec!["1"]);
    }

    #[test]
    fn splits_on_the_first_dash_and_trims() {
        let pages = [page("WIDGET- Navy-Blue ")];
        assert_eq!(text_after_dash(&pages), vec!["Navy-Blue"]);
    }

    // ── quantities_after_colon ───────────────────────────────────────────────

    #[test]
    fn requires_the_literal_colon_space_prefix() {
        let pages = [page("Qty: 12\nStock:7\nCode 99")];
        assert_eq!(quantities_after_colon(&pages), vec!["12"]);
    }

    #[test]
    fn collects_maximal_runs_across_pages_in_order() {
        let pages = [page("a: 12 b: 3"), page("c: 456")];
        assert_eq!(quantities_after_colon(&pages), vec!["12", "3", "456"]);
    }

    #[test]
    fn digits_stop_at_the_first_non_digit() {
        let pages = [page("lot: 12x3")];
        assert_eq!(quantities_after_colon(&pages), vec!["12"]);
    }
}
