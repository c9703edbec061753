//! Text-level rules for single fields. Each function works on already
//! selected text so it can be checked without any markup.

use crate::parser::DateRange;
use lazy_static::lazy_static;
use regex::Regex;

/// Marker text GitHub puts in front of the contributor avatars.
pub const BUILT_BY_MARKER: &str = "Built by";

lazy_static! {
    // "12,345" or "0"; separators only between digit groups
    static ref COUNT_REGEX: Regex = Regex::new(r"^\d{1,3}(?:,\d{3})*$|^\d+$").unwrap();

    // "1,234 stars today" / "87 stars this week" / "1 star this month"
    static ref RANGE_STARS_REGEX: Regex =
        Regex::new(r"^([\d,]+)\s+stars?\s+(today|this\s+week|this\s+month)$").unwrap();
}

/// Splits an "owner / name" heading. Exactly three whitespace separated
/// tokens are accepted and the middle one has to be the `/` glyph.
pub fn split_heading(text: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [owner, "/", name] => Some((owner.to_string(), name.to_string())),
        _ => None,
    }
}

/// Parses a thousands-separated count such as `12,345`.
pub fn parse_count(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if !COUNT_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.replace(',', "").parse().ok()
}

/// Star count gained in `range`, if `text` is the phrase for that exact
/// window. "12 stars this week" does not match a daily request.
pub fn range_stars(text: &str, range: DateRange) -> Option<u64> {
    let caps = RANGE_STARS_REGEX.captures(text.trim())?;
    let phrase = caps[2].split_whitespace().collect::<Vec<_>>().join(" ");
    if phrase != range.star_phrase() {
        return None;
    }
    parse_count(&caps[1])
}

/// `/alice` -> `alice`. Every path separator is dropped, not just the
/// leading one.
pub fn handle_from_href(href: &str) -> Option<String> {
    let handle: String = href.chars().filter(|c| *c != '/').collect();
    let handle = handle.trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}

pub fn is_built_by_marker(text: &str) -> bool {
    text.contains(BUILT_BY_MARKER)
}
