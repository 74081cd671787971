//! Constants used throughout the meal core crate.
//!
//! Upstream identifiers, user-facing message strings and fixed display settings live here so the
//! page renderer and the JSON API agree on wording.

use chrono::NaiveDate;

/// Default NEIS meal service endpoint.
pub const DEFAULT_NEIS_BASE_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

/// Default provincial office of education code (Seoul).
pub const DEFAULT_OFFICE_CODE: &str = "B10";

/// Default school code (Sangam High School).
pub const DEFAULT_SCHOOL_CODE: &str = "7010806";

/// Default short school name used in the page title.
pub const DEFAULT_SCHOOL_NAME: &str = "상암고";

/// Default full school name used in the page footer.
pub const DEFAULT_SCHOOL_FULL_NAME: &str = "상암고등학교";

/// Default listen address for the web server.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Offset of Asia/Seoul from UTC in seconds. Korea has not observed DST since 1988.
pub const SEOUL_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Earliest date the date picker allows.
pub const MIN_SELECTABLE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("invalid minimum date"),
};

/// Line-break marker used by NEIS inside text fields.
pub const LINE_BREAK_MARKER: &str = "<br/>";

/// Placeholder returned by the menu normaliser for empty input.
pub const NO_MENU_PLACEHOLDER: &str = "급식 정보가 없어요.";

/// Message shown when no meal could be obtained for the chosen date.
pub const NO_MEAL_FOR_DATE_MESSAGE: &str = "해당 날짜에 급식 정보가 없어요.";

/// Message shown when the meal carries no nutrition listing.
pub const NO_NUTRITION_MESSAGE: &str = "영양정보가 제공되지 않았습니다.";

/// Message shown when none of the macro-nutrients are present.
pub const NO_MACROS_MESSAGE: &str = "탄수화물, 단백질, 지방 정보가 제공되지 않았습니다.";

/// Nutrient labels charted on the page, in display order.
pub const MACRO_KEYS: [&str; 3] = ["탄수화물(g)", "단백질(g)", "지방(g)"];
