//! Date display route.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::ErrorBody;
use crate::humanize::{DateError, DateView, parse_date, render_date};

#[derive(Debug, Deserialize)]
pub struct HumanizeQuery {
    pub date: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub plain: bool,
    /// Reference instant; defaults to the current time.
    #[serde(default)]
    pub now: Option<String>,
}

fn default_locale() -> String {
    "en".into()
}

/// `GET /api/dates/humanize?date=...&locale=...&plain=...`
pub async fn humanize_date(Query(query): Query<HumanizeQuery>) -> Result<Json<DateView>, (StatusCode, Json<ErrorBody>)> {
    let bad_request = |err: DateError| (StatusCode::BAD_REQUEST, Json(ErrorBody::from_error(&err)));
    let now = match query.now.as_deref() {
        Some(raw) => parse_date(raw).map_err(bad_request)?,
        None => OffsetDateTime::now_utc(),
    };
    render_date(&query.date, &query.locale, now, query.plain)
        .map(Json)
        .map_err(bad_request)
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
