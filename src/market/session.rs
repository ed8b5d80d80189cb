//! Trading-session clock.

use crate::models::context::TradingSession;
use chrono::{DateTime, Timelike, Utc};

/// Session for a given instant, by UTC hour: [0,8) Asian, [8,13) London,
/// [13,16) London/NY overlap, [16,21) New York, otherwise overnight.
pub fn session_at(at: DateTime<Utc>) -> TradingSession {
    match at.hour() {
        0..=7 => TradingSession::Asian,
        8..=12 => TradingSession::London,
        13..=15 => TradingSession::LondonNyOverlap,
        16..=20 => TradingSession::NewYork,
        _ => TradingSession::Overnight,
    }
}
