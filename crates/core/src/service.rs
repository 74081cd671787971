//! Daily meal lookup.
//!
//! Ties the fetcher, the menu normaliser and the nutrition parser together and hands the
//! presentation layer one [`DailyMeal`] per request.

use crate::config::CoreConfig;
use crate::menu::clean_menu;
use crate::neis::{NeisClient, RawMeal};
use crate::nutrition::{macro_nutrients, parse_nutrition, NutritionMap};
use crate::MealResult;
use chrono::NaiveDate;
use std::sync::Arc;

/// What the page shows for one date.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyMeal {
    pub date: NaiveDate,
    /// Cleaned dish listing; `None` when no meal could be obtained.
    pub menu: Option<String>,
    /// Parsed nutrition; empty when no meal could be obtained or none was listed.
    pub nutrition: NutritionMap,
}

impl DailyMeal {
    /// Builds the page data from a fetch result.
    ///
    /// An absent meal or an empty dish listing both count as "no meal for this date".
    pub fn from_raw(date: NaiveDate, raw: Option<RawMeal>) -> Self {
        match raw {
            Some(raw) if !raw.dish.is_empty() => Self {
                date,
                menu: Some(clean_menu(Some(&raw.dish))),
                nutrition: parse_nutrition(Some(&raw.nutrition)),
            },
            _ => Self {
                date,
                menu: None,
                nutrition: NutritionMap::new(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        self.menu.is_some()
    }

    /// Macro-nutrients present in this meal, in chart order.
    pub fn macros(&self) -> Vec<(&'static str, f64)> {
        macro_nutrients(&self.nutrition)
    }
}

/// Meal lookups for the configured school.
#[derive(Clone, Debug)]
pub struct MealService {
    cfg: Arc<CoreConfig>,
    client: NeisClient,
}

impl MealService {
    /// Creates a new `MealService`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(cfg: Arc<CoreConfig>) -> MealResult<Self> {
        let client = NeisClient::new(cfg.clone())?;
        Ok(Self { cfg, client })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Fetches and prepares the meal for `date`. Never fails; see [`NeisClient::fetch_meal`].
    pub async fn daily_meal(&self, date: NaiveDate) -> DailyMeal {
        let raw = self.client.fetch_meal(date).await;
        DailyMeal::from_raw(date, raw)
    }
}
