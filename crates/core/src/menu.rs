//! Dish listing normalisation.
//!
//! NEIS dish names carry `<br/>` separators and allergen codes such as `김치찌개 (5.9.13.)`.
//! The page only shows the dish names, so digits and the punctuation around the codes are
//! stripped.

use crate::constants::{LINE_BREAK_MARKER, NO_MENU_PLACEHOLDER};
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d").ok());

/// Cleans a raw NEIS dish listing for display.
///
/// Steps, in order:
/// 1. `<br/>` → newline
/// 2. remove every decimal digit
/// 3. remove `(`, `)` and `.`
/// 4. trim surrounding whitespace
///
/// # Arguments
/// * `raw` - `DDISH_NM` value, or `None` if no meal was obtained
///
/// # Returns
/// The cleaned text, or [`NO_MENU_PLACEHOLDER`] when `raw` is absent or empty.
pub fn clean_menu(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return NO_MENU_PLACEHOLDER.to_string(),
    };

    let text = raw.replace(LINE_BREAK_MARKER, "\n");
    let text = match DIGIT_PATTERN.as_ref() {
        Some(pattern) => pattern.replace_all(&text, "").into_owned(),
        None => text.chars().filter(|c| !c.is_numeric()).collect(),
    };
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '.'))
        .collect();

    text.trim().to_string()
}
