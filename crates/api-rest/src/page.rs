//! Server-rendered meal page.
//!
//! Each control on the page is a plain link or GET form, so every interaction is a full
//! re-render of this page. All dynamic text goes through `html_escape`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use meal_core::constants::{
    MIN_SELECTABLE_DATE, NO_MACROS_MESSAGE, NO_MEAL_FOR_DATE_MESSAGE, NO_NUTRITION_MESSAGE,
};
use meal_core::date::format_display;
use meal_core::{DailyMeal, DayShift};

/// Qualitative Set2 palette, one colour per bar.
const BAR_COLOURS: [&str; 3] = ["#66c2a5", "#fc8d62", "#8da0cb"];

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 500.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 50.0;

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem;color:#31333f}\
.caption{color:#808495;font-size:.9rem}\
.shift{display:flex;gap:.5rem;margin:1rem 0}\
.shift a,.button{flex:1;text-align:center;padding:.5rem;border:1px solid #d6d6d9;border-radius:.5rem;text-decoration:none;color:inherit;display:inline-block}\
.success{background:#dff5e3;color:#177233;padding:1rem;border-radius:.5rem}\
.info{background:#e0eefe;color:#0054a3;padding:1rem;border-radius:.5rem}\
.error{background:#ffe5e5;color:#7d353b;padding:1rem;border-radius:.5rem}\
pre.menu{font-size:1rem;line-height:1.6}\
footer{border-top:1px solid #e6e6e6;margin-top:2rem;padding-top:1rem}";

/// Everything one render of the page needs.
pub struct PageView<'a> {
    pub school_name: &'a str,
    pub school_full_name: &'a str,
    pub meal: &'a DailyMeal,
    pub recommendation: Option<&'a str>,
}

/// Renders the full HTML document.
pub fn render_page(view: &PageView<'_>) -> String {
    let school = encode_text(view.school_name);
    let display_date = format_display(view.meal.date);

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{school} 급식</title>\n"));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>🍱 {school} 급식 조회</h1>\n"));
    html.push_str(
        "<p class=\"caption\">어제·오늘·내일 버튼 또는 달력에서 날짜를 선택해 급식을 확인하세요!</p>\n",
    );

    html.push_str(&render_shift_controls());
    html.push_str(&render_date_picker(&display_date));
    html.push_str(&render_meal(view.meal, &display_date));
    html.push_str(&render_recommendation(&display_date, view.recommendation));

    html.push_str(&format!(
        "<footer><p class=\"caption\">📍 {}</p></footer>\n</body>\n</html>\n",
        encode_text(view.school_full_name)
    ));
    html
}

fn render_shift_controls() -> String {
    let controls = [
        (DayShift::Yesterday, "⬅️ 어제"),
        (DayShift::Today, "📅 오늘"),
        (DayShift::Tomorrow, "➡️ 내일"),
    ];
    let links: String = controls
        .iter()
        .map(|(shift, label)| format!("<a href=\"/?shift={}\">{label}</a>", shift.as_str()))
        .collect();
    format!("<nav class=\"shift\">{links}</nav>\n")
}

fn render_date_picker(display_date: &str) -> String {
    format!(
        "<form method=\"get\" action=\"/\">\
<label for=\"date\">날짜 선택</label> \
<input type=\"date\" id=\"date\" name=\"date\" value=\"{}\" min=\"{}\" onchange=\"this.form.submit()\"> \
<button type=\"submit\">조회</button></form>\n",
        encode_double_quoted_attribute(display_date),
        format_display(MIN_SELECTABLE_DATE)
    )
}

fn render_meal(meal: &DailyMeal, display_date: &str) -> String {
    let Some(menu) = meal.menu.as_deref() else {
        return format!("<p class=\"error\">{NO_MEAL_FOR_DATE_MESSAGE}</p>\n");
    };

    let mut html = format!(
        "<p class=\"success\">📅 {display_date} 급식 메뉴</p>\n<pre class=\"menu\">{}</pre>\n",
        encode_text(menu)
    );

    if meal.nutrition.is_empty() {
        html.push_str(&format!("<p class=\"info\">{NO_NUTRITION_MESSAGE}</p>\n"));
        return html;
    }

    html.push_str("<h3>⚖️ 주요 영양소 비교 (탄수화물 / 단백질 / 지방)</h3>\n");
    let macros = meal.macros();
    if macros.is_empty() {
        html.push_str(&format!("<p class=\"info\">{NO_MACROS_MESSAGE}</p>\n"));
    } else {
        html.push_str(&render_bar_chart(&macros));
    }
    html
}

fn render_recommendation(display_date: &str, recommendation: Option<&str>) -> String {
    let mut html = format!(
        "<p><a class=\"button\" href=\"/?date={}&amp;recommend=1\">🎲 랜덤 메뉴 추천 받기</a></p>\n",
        encode_double_quoted_attribute(display_date)
    );
    if let Some(menu) = recommendation {
        html.push_str(&format!(
            "<p class=\"info\">오늘의 랜덤 추천 메뉴는 👉 <b>{}</b> 입니다!</p>\n",
            encode_text(menu)
        ));
    }
    html
}

/// Renders the macro-nutrient bar chart as inline SVG with value labels above each bar.
pub fn render_bar_chart(bars: &[(&str, f64)]) -> String {
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;

    // Headroom keeps the outside labels inside the plot.
    let max_value = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let scale_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

    let slot = plot_width / bars.len().max(1) as f64;
    let bar_width = slot * 0.6;

    let mut svg = format!(
        "<svg class=\"chart\" role=\"img\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" \
width=\"100%\" font-size=\"16\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    svg.push_str(&format!(
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{baseline}\" x2=\"{}\" y2=\"{baseline}\" stroke=\"#999\"/>\n",
        CHART_WIDTH - MARGIN_RIGHT
    ));
    svg.push_str(&format!(
        "<text x=\"20\" y=\"{y}\" transform=\"rotate(-90 20 {y})\" text-anchor=\"middle\">영양소(g)</text>\n",
        y = MARGIN_TOP + plot_height / 2.0
    ));

    for (i, (label, value)) in bars.iter().enumerate() {
        let height = (value.max(0.0) / scale_max) * plot_height;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = baseline - height;
        let centre = x + bar_width / 2.0;
        let colour = BAR_COLOURS[i % BAR_COLOURS.len()];

        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{colour}\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{centre:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            y - 6.0,
            format_quantity(*value)
        ));
        svg.push_str(&format!(
            "<text x=\"{centre:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
            baseline + 28.0,
            encode_text(label)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Whole numbers without a trailing `.0`, everything else as parsed.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
