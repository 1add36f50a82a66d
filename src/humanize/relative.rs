//! Relative-time thresholds.
//!
//! The elapsed time is rounded independently into each unit and the first
//! matching rule wins: a few seconds up to 44 s, then seconds below 45 s,
//! minutes below 45 min, hours below 22 h, days below 26 d, months below
//! 11 months, years beyond.

use time::{Duration, OffsetDateTime};

use super::locale::{Locale, Unit};

const SS: f64 = 44.0;
const S: f64 = 45.0;
const M: f64 = 45.0;
const H: f64 = 22.0;
const D: f64 = 26.0;
const MONTHS: f64 = 11.0;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Pick the unit and count for an elapsed duration (sign ignored).
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn relative_unit(elapsed: Duration) -> (Unit, i64) {
    let ms = elapsed.whole_milliseconds().unsigned_abs() as f64;
    let days_exact = ms / MS_PER_DAY;
    let months_exact = days_exact * 4800.0 / 146_097.0;

    let seconds = (ms / 1000.0).round();
    let minutes = (ms / 60_000.0).round();
    let hours = (ms / 3_600_000.0).round();
    let days = days_exact.round();
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    let (unit, count) = if seconds <= SS {
        (Unit::FewSeconds, seconds)
    } else if seconds < S {
        (Unit::Seconds, seconds)
    } else if minutes <= 1.0 {
        (Unit::Minute, 1.0)
    } else if minutes < M {
        (Unit::Minutes, minutes)
    } else if hours <= 1.0 {
        (Unit::Hour, 1.0)
    } else if hours < H {
        (Unit::Hours, hours)
    } else if days <= 1.0 {
        (Unit::Day, 1.0)
    } else if days < D {
        (Unit::Days, days)
    } else if months <= 1.0 {
        (Unit::Month, 1.0)
    } else if months < MONTHS {
        (Unit::Months, months)
    } else if years <= 1.0 {
        (Unit::Year, 1.0)
    } else {
        (Unit::Years, years)
    };
    (unit, count as i64)
}

/// Humanize `date` relative to `now`, e.g. `3 hours ago` or `in a day`.
#[must_use]
pub fn humanize(date: OffsetDateTime, now: OffsetDateTime, locale: Locale) -> String {
    let diff = date - now;
    let (unit, count) = relative_unit(diff);
    locale.wrap(&locale.unit_phrase(unit, count), diff.is_positive())
}

#[cfg(test)]
#[path = "relative_test.rs"]
mod tests;
