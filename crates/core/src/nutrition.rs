//! Nutrition listing parser.
//!
//! NEIS reports nutrition as `label : value` lines joined with `<br/>`, for example
//! `탄수화물(g) : 120.5<br/>단백질(g) : 38.2`. Lines that do not yield a number are dropped;
//! parsing never fails.

use crate::constants::{LINE_BREAK_MARKER, MACRO_KEYS};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Nutrient label (e.g. `탄수화물(g)`) to quantity.
pub type NutritionMap = BTreeMap<String, f64>;

static NUMBER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[-+]?\d*\.\d+|\d+").ok());

/// Parses a raw `NTR_INFO` value into a label → quantity map.
///
/// Each line containing a colon is split on the first colon. The first numeric run in the value
/// part is parsed as `f64` and stored under the trimmed label. A repeated label keeps the last
/// value.
///
/// # Arguments
/// * `raw` - `NTR_INFO` value, or `None` if no meal was obtained
///
/// # Returns
/// The parsed map; empty when `raw` is absent or empty.
pub fn parse_nutrition(raw: Option<&str>) -> NutritionMap {
    let mut nutrition = NutritionMap::new();
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return nutrition,
    };
    let Some(pattern) = NUMBER_PATTERN.as_ref() else {
        tracing::warn!("nutrition number pattern failed to compile");
        return nutrition;
    };

    let text = raw.replace(LINE_BREAK_MARKER, "\n");
    for line in text.split('\n') {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let quantity = pattern
            .find(value)
            .and_then(|m| m.as_str().parse::<f64>().ok());
        match quantity {
            Some(quantity) => {
                nutrition.insert(label.trim().to_string(), quantity);
            }
            None => tracing::debug!(line, "skipping nutrition line without a number"),
        }
    }

    nutrition
}

/// Selects the charted macro-nutrients present in `nutrition`, in display order.
pub fn macro_nutrients(nutrition: &NutritionMap) -> Vec<(&'static str, f64)> {
    MACRO_KEYS
        .iter()
        .filter_map(|&key| nutrition.get(key).map(|&value| (key, value)))
        .collect()
}
