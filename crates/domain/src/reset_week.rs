//! Weekly reset clock.
//!
//! The ledger week rolls over every Wednesday 06:00 in a fixed civil zone
//! (UTC+9, no DST). Everything here is pure: callers inject `now` and all
//! other components receive the computed boundary as a parameter.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Fixed offset of the reset zone, in seconds east of UTC.
const RESET_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Hour of day (in the reset zone) at which the week rolls over.
const RESET_HOUR: u32 = 6;

fn reset_zone() -> FixedOffset {
    FixedOffset::east_opt(RESET_UTC_OFFSET_SECS).expect("reset offset is within +/-24h")
}

fn reset_time() -> NaiveTime {
    NaiveTime::from_hms_opt(RESET_HOUR, 0, 0).expect("reset hour is a valid time of day")
}

/// Most recent Wednesday 06:00 (reset zone) at or before `now`.
///
/// A `now` that falls on a Wednesday before 06:00 still belongs to the
/// previous week; exactly 06:00 starts the new week.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let local = now.with_timezone(&reset_zone());
    let days_since_wednesday = (local.weekday().num_days_from_monday() + 7
        - Weekday::Wed.num_days_from_monday())
        % 7;
    let wednesday = local.date_naive() - Duration::days(i64::from(days_since_wednesday));
    let mut boundary = wednesday.and_time(reset_time());
    if local.naive_local() < boundary {
        boundary -= Duration::weeks(1);
    }
    DateTime::from_naive_utc_and_offset(
        boundary - Duration::seconds(i64::from(RESET_UTC_OFFSET_SECS)),
        Utc,
    )
}

/// The next weekly boundary strictly after `now`.
pub fn next_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    week_start(now) + Duration::weeks(1)
}

/// Time remaining until the next reset, split for display.
pub fn until_reset(now: DateTime<Utc>) -> ResetCountdown {
    let remaining = next_reset(now) - now;
    ResetCountdown {
        days: remaining.num_days(),
        hours: remaining.num_hours() % 24,
        minutes: remaining.num_minutes() % 60,
    }
}

/// Countdown to the next weekly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCountdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl std::fmt::Display for ResetCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}
