//! Humanize — localized date display.
//!
//! A date renders either plain (medium localized date) or humanized
//! (`3 hours ago`) with the localized date as tooltip and the raw input as
//! the machine-readable `datetime`.

pub mod locale;
pub mod relative;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub use locale::Locale;
pub use relative::humanize;

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("unparseable date '{0}' (expected RFC 3339 or YYYY-MM-DD)")]
    Unparseable(String),
}

impl crate::error::ErrorCode for DateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unparseable(_) => "E_DATE_PARSE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateView {
    Plain { text: String },
    Humanized { datetime: String, text: String, tooltip: String },
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] for anything else.
pub fn parse_date(raw: &str) -> Result<OffsetDateTime, DateError> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(|d| d.midnight().assume_utc())
        .map_err(|_| DateError::Unparseable(raw.to_string()))
}

/// Medium localized date in the timestamp's own offset.
#[must_use]
pub fn localize(date: OffsetDateTime, locale: Locale) -> String {
    locale.medium_date(date.year(), u8::from(date.month()), date.day())
}

/// Render `raw` for display.
///
/// # Errors
///
/// Returns [`DateError`] if `raw` cannot be parsed.
pub fn render_date(raw: &str, locale_tag: &str, now: OffsetDateTime, plain: bool) -> Result<DateView, DateError> {
    let date = parse_date(raw)?;
    let locale = Locale::from_tag(locale_tag);
    let localized = localize(date, locale);
    if plain {
        return Ok(DateView::Plain { text: localized });
    }
    Ok(DateView::Humanized { datetime: raw.trim().to_string(), text: humanize(date, now, locale), tooltip: localized })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
