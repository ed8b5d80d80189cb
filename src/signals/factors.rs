//! Assembles the per-pass factor breakdown from indicators and context.

use crate::market::{calendar_score_at, key_levels_score, regime_score};
use crate::models::context::{ContextSnapshot, HtfAlignment};
use crate::models::signal::ScoreFactors;
use chrono::{DateTime, Utc};

/// Volatility sweet-spot mapping: calm and moderately calm markets score
/// positive, choppy markets score negative.
pub fn volatility_factor(volatility: f64) -> f64 {
    if volatility < 0.008 {
        8.0
    } else if volatility < 0.015 {
        15.0
    } else if volatility < 0.025 {
        5.0
    } else {
        -5.0
    }
}

/// Higher-timeframe contribution: direction times +/-25, discounted by the
/// provider's confidence in it.
pub fn htf_factor(htf: &HtfAlignment) -> f64 {
    f64::from(htf.score) * 25.0 * htf.confidence.clamp(0.0, 1.0)
}

/// Build the full factor set for one scoring pass.
pub fn compute_factors(
    snapshot: &ContextSnapshot,
    closes: &[f64],
    current_price: f64,
    now: DateTime<Utc>,
) -> ScoreFactors {
    ScoreFactors {
        volatility: volatility_factor(snapshot.volatility),
        regime: regime_score(snapshot.regime),
        htf: htf_factor(&snapshot.htf),
        key_levels: key_levels_score(closes, current_price),
        volume: snapshot.volume_score,
        sentiment: snapshot.sentiment_score,
        calendar: calendar_score_at(now),
        pattern: snapshot.pattern_score,
        risk_gate: snapshot.risk_gate_score,
        correlation: snapshot.correlation_score,
    }
}
