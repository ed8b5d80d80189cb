//! Economic-calendar proxy.
//!
//! No calendar feed is consumed; the high-impact windows are the recurring
//! UTC slots for FOMC-minute Wednesdays and NFP Fridays.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

/// -20 inside a recurring high-impact window (Wed 13-15 UTC, Fri 7-10 UTC),
/// +10 otherwise.
pub fn calendar_score_at(at: DateTime<Utc>) -> f64 {
    let weekday = at.weekday();
    let hour = at.hour();

    let high_impact = (weekday == Weekday::Wed && (13..=15).contains(&hour))
        || (weekday == Weekday::Fri && (7..=10).contains(&hour));

    if high_impact {
        -20.0
    } else {
        10.0
    }
}
