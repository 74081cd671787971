//! NEIS meal service client.
//!
//! One GET per lookup, no timeout and no retry. Every failure (network, non-JSON body, missing
//! keys, no meal row for the day) collapses to `None`; callers cannot and should not tell them
//! apart. The cause is only logged.

use crate::config::CoreConfig;
use crate::date::format_api;
use crate::error::{FetchError, MealError, MealResult};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;

/// Raw text fields of one day's meal as returned by NEIS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMeal {
    /// `DDISH_NM`: dish listing separated by `<br/>`.
    pub dish: String,
    /// `NTR_INFO`: nutrition listing separated by `<br/>`.
    pub nutrition: String,
}

/// HTTP client for the NEIS meal service.
#[derive(Clone, Debug)]
pub struct NeisClient {
    http: reqwest::Client,
    cfg: Arc<CoreConfig>,
}

impl NeisClient {
    /// Creates a client for the endpoint and school in `cfg`.
    ///
    /// # Errors
    /// Returns [`MealError::HttpClient`] if the underlying HTTP client cannot be built.
    pub fn new(cfg: Arc<CoreConfig>) -> MealResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("meal-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MealError::HttpClient)?;
        Ok(Self { http, cfg })
    }

    /// Builds the request URL for `date`.
    pub fn meal_url(&self, date: NaiveDate) -> String {
        format!(
            "{}?ATPT_OFCDC_SC_CODE={}&SD_SCHUL_CODE={}&Type=json&MLSV_YMD={}",
            self.cfg.neis_base_url(),
            self.cfg.office_code(),
            self.cfg.school_code(),
            format_api(date)
        )
    }

    /// Fetches the meal for `date`.
    ///
    /// # Returns
    /// `Some(RawMeal)` if the response carried both text fields, `None` on any failure.
    pub async fn fetch_meal(&self, date: NaiveDate) -> Option<RawMeal> {
        let url = self.meal_url(date);
        match self.try_fetch(&url).await {
            Ok(meal) => {
                tracing::debug!(%date, "fetched meal");
                Some(meal)
            }
            Err(FetchError::NoMealRow { code }) => {
                tracing::info!(%date, %code, "no meal row in NEIS response");
                None
            }
            Err(e) => {
                tracing::warn!(%date, "meal fetch failed: {e}");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<RawMeal, FetchError> {
        let response = self.http.get(url).send().await.map_err(FetchError::Request)?;
        let body = response.text().await.map_err(FetchError::Body)?;
        parse_meal_body(&body)
    }
}

/// Extracts the first meal row from a NEIS response body.
///
/// Expects `{"mealServiceDietInfo": [<head>, {"row": [{"DDISH_NM": .., "NTR_INFO": ..}]}]}`.
/// Returns `None` if the body is not JSON or either field is missing or not a string.
pub fn extract_meal(body: &str) -> Option<RawMeal> {
    parse_meal_body(body).ok()
}

fn parse_meal_body(body: &str) -> Result<RawMeal, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(FetchError::Json)?;
    let row = &value["mealServiceDietInfo"][1]["row"][0];

    match (row["DDISH_NM"].as_str(), row["NTR_INFO"].as_str()) {
        (Some(dish), Some(nutrition)) => Ok(RawMeal {
            dish: dish.to_string(),
            nutrition: nutrition.to_string(),
        }),
        _ => Err(FetchError::NoMealRow {
            code: result_code(&value),
        }),
    }
}

/// NEIS reports "no data" as `{"RESULT": {"CODE": "INFO-200", ..}}` instead of an empty row list.
fn result_code(value: &Value) -> String {
    value
        .pointer("/RESULT/CODE")
        .or_else(|| value.pointer("/mealServiceDietInfo/0/head/1/RESULT/CODE"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> NeisClient {
        NeisClient::new(Arc::new(CoreConfig::default())).unwrap()
    }

    #[test]
    fn test_meal_url_uses_school_and_api_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            client().meal_url(date),
            "https://open.neis.go.kr/hub/mealServiceDietInfo?ATPT_OFCDC_SC_CODE=B10&SD_SCHUL_CODE=7010806&Type=json&MLSV_YMD=250307"
        );
    }

    #[test]
    fn test_extract_meal_reads_first_row() {
        let body = json!({
            "mealServiceDietInfo": [
                {"head": [{"list_total_count": 1}, {"RESULT": {"CODE": "INFO-000"}}]},
                {"row": [
                    {"DDISH_NM": "밥<br/>국", "NTR_INFO": "탄수화물(g) : 100", "MMEAL_SC_NM": "중식"},
                    {"DDISH_NM": "석식", "NTR_INFO": ""}
                ]}
            ]
        })
        .to_string();

        assert_eq!(
            extract_meal(&body),
            Some(RawMeal {
                dish: "밥<br/>국".into(),
                nutrition: "탄수화물(g) : 100".into(),
            })
        );
    }

    #[test]
    fn test_extract_meal_no_data_result() {
        let body = json!({"RESULT": {"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}})
            .to_string();
        assert_eq!(extract_meal(&body), None);
        let err = parse_meal_body(&body).expect_err("no row");
        assert!(matches!(err, FetchError::NoMealRow { code } if code == "INFO-200"));
    }

    #[test]
    fn test_extract_meal_malformed_bodies() {
        assert_eq!(extract_meal("<html>503</html>"), None);
        assert_eq!(extract_meal(""), None);
        assert_eq!(extract_meal(r#"{"mealServiceDietInfo": [{}]}"#), None);
        assert_eq!(extract_meal(r#"{"mealServiceDietInfo": [{}, {"row": []}]}"#), None);
    }

    #[test]
    fn test_extract_meal_requires_both_fields() {
        let body = json!({"mealServiceDietInfo": [{}, {"row": [{"DDISH_NM": "밥"}]}]}).to_string();
        assert_eq!(extract_meal(&body), None);

        let body =
            json!({"mealServiceDietInfo": [{}, {"row": [{"DDISH_NM": 3, "NTR_INFO": "x"}]}]})
                .to_string();
        assert_eq!(extract_meal(&body), None);
    }
}
