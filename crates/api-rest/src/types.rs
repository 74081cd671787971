//! Request and response types for the page and the JSON API.

use meal_core::constants::NO_MENU_PLACEHOLDER;
use meal_core::date::{format_display, parse_picked};
use meal_core::{DailyMeal, DateRequest, DayShift};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Query parameters shared by the page and `/api/meals`.
///
/// Every field is kept as raw text so a malformed value is ignored instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MealQuery {
    /// `yesterday`, `today` or `tomorrow`, relative to today in Asia/Seoul
    pub shift: Option<String>,
    /// Picked date (`yyyy-MM-dd`); overrides `shift`
    pub date: Option<String>,
    /// Any non-empty value asks the page for a random menu suggestion
    pub recommend: Option<String>,
}

impl MealQuery {
    pub fn date_request(&self) -> DateRequest {
        let shift = self.shift.as_deref().and_then(|value| {
            value
                .parse::<DayShift>()
                .map_err(|e| tracing::debug!("ignoring shift: {e}"))
                .ok()
        });
        let picked = self.date.as_deref().and_then(|value| {
            let picked = parse_picked(value);
            if picked.is_none() && !value.trim().is_empty() {
                tracing::debug!(value, "ignoring malformed picked date");
            }
            picked
        });
        DateRequest { shift, picked }
    }

    pub fn wants_recommendation(&self) -> bool {
        self.recommend
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MacroRes {
    pub label: String,
    pub grams: f64,
}

/// One day's meal as JSON.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MealRes {
    /// Resolved date (`yyyy-MM-dd`)
    pub date: String,
    /// Whether NEIS returned a meal for the date
    pub found: bool,
    /// Cleaned dish listing, or the placeholder text when `found` is false
    pub menu: String,
    pub nutrition: BTreeMap<String, f64>,
    /// Carbohydrate, protein and fat, in that order, when present
    pub macros: Vec<MacroRes>,
}

impl MealRes {
    pub fn from_meal(meal: &DailyMeal) -> Self {
        Self {
            date: format_display(meal.date),
            found: meal.is_found(),
            menu: meal
                .menu
                .clone()
                .unwrap_or_else(|| NO_MENU_PLACEHOLDER.to_string()),
            nutrition: meal.nutrition.clone(),
            macros: meal
                .macros()
                .into_iter()
                .map(|(label, grams)| MacroRes {
                    label: label.to_string(),
                    grams,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRes {
    pub menu: String,
}
