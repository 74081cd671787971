//! # Meal Core
//!
//! Core logic for the school meal menu viewer.
//!
//! This crate contains the data side of a page render:
//! - Date resolution in Asia/Seoul (`date`)
//! - The NEIS meal service client (`neis`)
//! - Dish listing cleanup (`menu`) and nutrition parsing (`nutrition`)
//! - The static recommendation catalog (`recommend`)
//! - [`MealService`], which ties the above together per request
//!
//! **No HTTP server concerns**: routing, HTML rendering and OpenAPI documentation belong in
//! `api-rest`.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod menu;
pub mod neis;
pub mod nutrition;
pub mod recommend;
pub mod service;

pub use config::CoreConfig;
pub use date::{resolve_date, today_in_seoul, DateRequest, DayShift};
pub use error::{MealError, MealResult};
pub use menu::clean_menu;
pub use neis::{extract_meal, NeisClient, RawMeal};
pub use nutrition::{macro_nutrients, parse_nutrition, NutritionMap};
pub use recommend::{pick_recommendation, RECOMMENDATIONS};
pub use service::{DailyMeal, MealService};
