//! # API REST
//!
//! HTTP surface of the meal menu viewer.
//!
//! Handles:
//! - The server-rendered meal page (`/`)
//! - JSON endpoints with OpenAPI/Swagger documentation
//! - HTTP-specific concerns (CORS, request tracing)
//!
//! Uses `meal-core` for date resolution, fetching and parsing.

#![warn(rust_2018_idioms)]

pub mod health;
pub mod page;
pub mod types;

use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use meal_core::{pick_recommendation, resolve_date, today_in_seoul, MealService};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use health::HealthService;
use page::{render_page, PageView};
use types::{HealthRes, MacroRes, MealQuery, MealRes, RecommendationRes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    meal_service: MealService,
}

impl AppState {
    pub fn new(meal_service: MealService) -> Self {
        Self { meal_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, meals, recommendation),
    components(schemas(HealthRes, MacroRes, MealRes, RecommendationRes))
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// * `state` - Shared state holding the configured [`MealService`]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meal_page))
        .route("/health", get(health))
        .route("/api/meals", get(meals))
        .route("/api/recommendation", get(recommendation))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Meal page for the date selected by `shift` / `date`.
///
/// Fetches the meal from NEIS on every request. Any upstream failure renders the single
/// "no meal for this date" message.
#[axum::debug_handler]
async fn meal_page(State(state): State<AppState>, Query(query): Query<MealQuery>) -> Html<String> {
    let date = resolve_date(today_in_seoul(), &query.date_request());
    let meal = state.meal_service.daily_meal(date).await;
    tracing::info!(%date, found = meal.is_found(), "rendering meal page");

    let recommendation = query
        .wants_recommendation()
        .then(|| pick_recommendation(&mut rand::thread_rng()));

    let cfg = state.meal_service.config();
    Html(render_page(&PageView {
        school_name: cfg.school_name(),
        school_full_name: cfg.school_full_name(),
        meal: &meal,
        recommendation,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// # Returns
/// * `Json<HealthRes>` - Health status response
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/meals",
    params(MealQuery),
    responses(
        (status = 200, description = "Meal for the resolved date; `found` is false when NEIS had none or could not be reached", body = MealRes)
    )
)]
/// Meal for a date as JSON
///
/// Resolves the date the same way as the page. Always answers `200`: an upstream failure is
/// reported as `found: false`, never as an error status.
#[axum::debug_handler]
async fn meals(State(state): State<AppState>, Query(query): Query<MealQuery>) -> Json<MealRes> {
    let date = resolve_date(today_in_seoul(), &query.date_request());
    let meal = state.meal_service.daily_meal(date).await;
    Json(MealRes::from_meal(&meal))
}

#[utoipa::path(
    get,
    path = "/api/recommendation",
    responses(
        (status = 200, description = "One random menu suggestion", body = RecommendationRes)
    )
)]
#[axum::debug_handler]
async fn recommendation(State(_state): State<AppState>) -> Json<RecommendationRes> {
    Json(RecommendationRes {
        menu: pick_recommendation(&mut rand::thread_rng()).to_string(),
    })
}
