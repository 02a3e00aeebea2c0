//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp truncated to seconds
//! precision, and the day arithmetic used by the review submission window.
//!
//! ## Invariant
//!
//! All timestamps in HireShield are UTC. The employment-window rule
//! ("a review must be filed within N days of the employment end date")
//! is whole-day arithmetic; local offsets would shift a submission across
//! the boundary depending on where the server runs.
//!
//! Non-UTC inputs are rejected at parse time — there is no silent
//! conversion.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted;
    /// explicit offsets — even `+00:00` — are refused so that stored
    /// representations stay uniform.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// valid RFC 3339 or carries a non-Z offset.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ValidationError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The UTC calendar date of this instant.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Whole days elapsed since the given calendar date, negative when the
    /// date lies in the future.
    ///
    /// Counted in UTC calendar days, not 24-hour blocks: an employment
    /// that ended yesterday is 1 day ago regardless of the time of day.
    pub fn days_since(&self, date: NaiveDate) -> i64 {
        self.date().signed_duration_since(date).num_days()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Build a timestamp from calendar components, for fixtures and tests.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] for out-of-range components.
pub fn timestamp_from_ymd_hms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> Result<Timestamp, ValidationError> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .map(Timestamp::from_utc)
        .ok_or_else(|| {
            ValidationError::InvalidTimestamp(format!(
                "invalid calendar components: {year:04}-{month:02}-{day:02} {hour:02}:{min:02}:{sec:02}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 45).unwrap();
        let with_nanos = dt.with_nanosecond(987_654_321).unwrap();
        let ts = Timestamp::from_utc(with_nanos);
        assert_eq!(ts.to_iso8601(), "2026-03-10T09:30:45Z");
    }

    #[test]
    fn parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2026-03-10T09:30:45Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-03-10T09:30:45Z");
    }

    #[test]
    fn parse_offsets_rejected() {
        assert!(Timestamp::parse("2026-03-10T09:30:45+00:00").is_err());
        assert!(Timestamp::parse("2026-03-10T15:00:45+05:30").is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-03-10").is_err());
    }

    #[test]
    fn display_matches_iso8601() {
        let ts = timestamp_from_ymd_hms(2026, 6, 30, 23, 59, 59).unwrap();
        assert_eq!(format!("{ts}"), "2026-06-30T23:59:59Z");
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::parse("2026-03-10T09:30:45Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    // ── day arithmetic ───────────────────────────────────────────────

    #[test]
    fn days_since_counts_calendar_days() {
        let ts = timestamp_from_ymd_hms(2026, 3, 10, 0, 0, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        // One second past midnight is still a full calendar day later.
        assert_eq!(ts.days_since(end), 1);
    }

    #[test]
    fn days_since_same_day_is_zero() {
        let ts = timestamp_from_ymd_hms(2026, 3, 10, 23, 59, 59).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(ts.days_since(end), 0);
    }

    #[test]
    fn days_since_future_date_is_negative() {
        let ts = timestamp_from_ymd_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        assert_eq!(ts.days_since(end), -10);
    }

    #[test]
    fn timestamp_from_ymd_hms_rejects_bad_components() {
        assert!(timestamp_from_ymd_hms(2026, 13, 1, 0, 0, 0).is_err());
        assert!(timestamp_from_ymd_hms(2026, 2, 30, 0, 0, 0).is_err());
    }
}
