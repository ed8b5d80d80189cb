//! Weighted total-score computation.
//!
//! Starts from a neutral 50 and lets each factor push the score through its
//! policy weight. Scale classes differ by factor family: volume, pattern and
//! risk factors get a 3x scale, sentiment is centered on 50 and applied
//! unscaled, the advisory confidence uses its own deviation formula, and the
//! remaining indicator-derived factors get 2x.

use crate::config::ScoringPolicy;
use crate::models::signal::ScoreFactors;
use crate::providers::advisory::AdvisoryOpinion;

const BASELINE: f64 = 50.0;
const INDICATOR_SCALE: f64 = 2.0;
const CONFIRMATION_SCALE: f64 = 3.0;

/// Total score in [0, 100], rounded to one decimal.
///
/// A risk-gate factor below the block threshold costs a flat extra penalty
/// so that risk breaches cannot be out-voted by bullish technicals.
pub fn total_score(
    factors: &ScoreFactors,
    advisory: &AdvisoryOpinion,
    policy: &ScoringPolicy,
) -> f64 {
    let w = &policy.weights;
    let mut score = BASELINE;

    score += factors.volatility * w.volatility * INDICATOR_SCALE;
    score += factors.regime * w.regime * INDICATOR_SCALE;
    score += factors.htf * w.htf * INDICATOR_SCALE;
    score += factors.key_levels * w.key_levels * INDICATOR_SCALE;
    score += factors.calendar * w.calendar * INDICATOR_SCALE;
    score += factors.correlation * w.correlation * INDICATOR_SCALE;

    score += factors.volume * w.volume * CONFIRMATION_SCALE;
    score += factors.pattern * w.pattern * CONFIRMATION_SCALE;
    score += factors.risk_gate * w.risk_gate * CONFIRMATION_SCALE;

    score += (factors.sentiment - 50.0) * w.sentiment;
    score += ((advisory.confidence - 50.0) / 50.0) * w.advisory * 100.0;

    if factors.risk_gate < policy.thresholds.risk_block {
        score -= ScoringPolicy::RISK_PENALTY;
    }

    (score.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
