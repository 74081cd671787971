//! Router behaviour against a mock NEIS endpoint.

use api_rest::types::{HealthRes, MealRes, RecommendationRes};
use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use meal_core::constants::{NO_MEAL_FOR_DATE_MESSAGE, NO_MENU_PLACEHOLDER};
use meal_core::{CoreConfig, MealService, RECOMMENDATIONS};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEAL_PATH: &str = "/hub/mealServiceDietInfo";

fn app_for(server: &MockServer) -> Router {
    let cfg = CoreConfig::from_overrides(
        Some(format!("{}{}", server.uri(), MEAL_PATH)),
        None,
        None,
        None,
        None,
    )
    .unwrap();
    let service = MealService::new(Arc::new(cfg)).unwrap();
    router(AppState::new(service))
}

fn meal_body() -> serde_json::Value {
    json!({
        "mealServiceDietInfo": [
            {"head": [{"list_total_count": 1}, {"RESULT": {"CODE": "INFO-000"}}]},
            {"row": [{
                "DDISH_NM": "<br/>김치찌개(100).<br/>밥2",
                "NTR_INFO": "탄수화물(g) : 120.5<br/>단백질(g) : 35.1<br/>지방(g) : 20.3<br/>칼슘(mg):300"
            }]}
        ]
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_page_renders_menu_and_chart() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEAL_PATH))
        .and(query_param("MLSV_YMD", "250307"))
        .respond_with(ResponseTemplate::new(200).set_body_json(meal_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, html) = get(app_for(&server), "/?date=2025-03-07").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("📅 2025-03-07 급식 메뉴"));
    assert!(html.contains("김치찌개\n밥"));
    assert!(html.contains("<svg"));
    assert!(html.contains(">120.5</text>"));
    assert!(!html.contains(NO_MEAL_FOR_DATE_MESSAGE));
}

#[tokio::test]
async fn test_page_picker_wins_over_shift() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEAL_PATH))
        .and(query_param("MLSV_YMD", "240102"))
        .respond_with(ResponseTemplate::new(200).set_body_json(meal_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, html) = get(app_for(&server), "/?shift=tomorrow&date=2024-01-02").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("📅 2024-01-02 급식 메뉴"));
}

#[tokio::test]
async fn test_page_upstream_failure_shows_no_meal_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEAL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let (status, html) = get(app_for(&server), "/?date=2025-03-07").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(NO_MEAL_FOR_DATE_MESSAGE));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_page_malformed_query_falls_back_to_today() {
    let server = MockServer::start().await;
    let today = meal_core::date::format_api(meal_core::today_in_seoul());
    Mock::given(method("GET"))
        .and(path(MEAL_PATH))
        .and(query_param("MLSV_YMD", today.as_str()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (status, html) = get(app_for(&server), "/?shift=later&date=yesterday").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(NO_MEAL_FOR_DATE_MESSAGE));
}

#[tokio::test]
async fn test_page_recommendation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_, html) = get(app_for(&server), "/?date=2025-03-07&recommend=1").await;

    assert!(html.contains("오늘의 랜덤 추천 메뉴는 👉"));
    assert!(RECOMMENDATIONS
        .iter()
        .any(|name| html.contains(&format!("<b>{name}</b>"))));
}

#[tokio::test]
async fn test_api_meals_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEAL_PATH))
        .and(query_param("MLSV_YMD", "250307"))
        .respond_with(ResponseTemplate::new(200).set_body_json(meal_body()))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/meals?date=2025-03-07").await;
    assert_eq!(status, StatusCode::OK);

    let res: MealRes = serde_json::from_str(&body).unwrap();
    assert!(res.found);
    assert_eq!(res.date, "2025-03-07");
    assert_eq!(res.menu, "김치찌개\n밥");
    assert_eq!(res.nutrition.get("칼슘(mg)"), Some(&300.0));
    let labels: Vec<&str> = res.macros.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["탄수화물(g)", "단백질(g)", "지방(g)"]);
}

#[tokio::test]
async fn test_api_meals_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RESULT": {"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/meals?date=2025-03-08").await;
    assert_eq!(status, StatusCode::OK);

    let res: MealRes = serde_json::from_str(&body).unwrap();
    assert!(!res.found);
    assert_eq!(res.menu, NO_MENU_PLACEHOLDER);
    assert!(res.nutrition.is_empty());
}

#[tokio::test]
async fn test_api_recommendation() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api/recommendation").await;
    assert_eq!(status, StatusCode::OK);

    let res: RecommendationRes = serde_json::from_str(&body).unwrap();
    assert!(RECOMMENDATIONS.contains(&res.menu.as_str()));
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let res: HealthRes = serde_json::from_str(&body).unwrap();
    assert!(res.ok);
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/meals"));
    assert!(body.contains("/api/recommendation"));
}
