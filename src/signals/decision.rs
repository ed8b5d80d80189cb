//! Decision ladder and price-level generation.

use crate::config::ScoringPolicy;
use crate::models::context::MarketRegime;
use crate::models::signal::{
    PositionState, Signal, SignalAction, SignalStatus, SignalStrength,
};
use chrono::Utc;

/// Confirmation flags and inputs gathered before the decision.
#[derive(Debug, Clone, Copy)]
pub struct Confirmations {
    pub volume_confirmed: bool,
    pub pattern_confirmed: bool,
    pub risk_blocked: bool,
    /// Risk-gate factor, also drives position-size scaling of the levels.
    pub risk_score: f64,
    pub regime: MarketRegime,
}

impl Confirmations {
    /// Derive the flags from raw factor values via policy thresholds.
    pub fn from_factors(
        volume_factor: f64,
        pattern_factor: f64,
        risk_factor: f64,
        regime: MarketRegime,
        policy: &ScoringPolicy,
    ) -> Self {
        Self {
            volume_confirmed: volume_factor > policy.thresholds.volume_confirm,
            pattern_confirmed: pattern_factor.abs() > policy.thresholds.pattern_confirm,
            risk_blocked: risk_factor < policy.thresholds.risk_block,
            risk_score: risk_factor,
            regime,
        }
    }
}

/// Outcome of the decision ladder.
#[derive(Debug, Clone)]
pub enum Decision {
    Trade(Signal),
    Hold { reason: String },
}

impl Decision {
    pub fn signal(self) -> Option<Signal> {
        match self {
            Decision::Trade(signal) => Some(signal),
            Decision::Hold { .. } => None,
        }
    }
}

/// Convert a total score plus confirmations into an action with levels.
///
/// The ladder tries the volume-confirmed bounds first, then the wider
/// pattern-confirmed bounds, then the bare 60/40 bounds; anything else is
/// HOLD with zero confidence. A hard risk block short-circuits everything.
pub fn decide(
    total_score: f64,
    current_price: f64,
    atr: f64,
    confirmations: &Confirmations,
    policy: &ScoringPolicy,
) -> Decision {
    let t = &policy.thresholds;

    if confirmations.risk_blocked {
        return Decision::Hold {
            reason: "Trading blocked - risk limits exceeded".to_string(),
        };
    }

    let action = if total_score > t.volume_buy && confirmations.volume_confirmed {
        SignalAction::Buy
    } else if total_score < t.volume_sell && confirmations.volume_confirmed {
        SignalAction::Sell
    } else if total_score > t.pattern_buy && confirmations.pattern_confirmed {
        SignalAction::Buy
    } else if total_score < t.pattern_sell && confirmations.pattern_confirmed {
        SignalAction::Sell
    } else if total_score > t.bare_buy {
        SignalAction::Buy
    } else if total_score < t.bare_sell {
        SignalAction::Sell
    } else {
        return Decision::Hold {
            reason: "Market conditions not optimal - waiting for confirmation".to_string(),
        };
    };

    let confidence = confidence_for(total_score, policy);
    let strength = SignalStrength::from_confidence(confidence);
    let (stop_loss, take_profit1, take_profit2) =
        price_levels(action, current_price, atr, confirmations, policy);

    let reason = format!(
        "Score {:.1}/100 in {} regime. Volume: {}. Patterns: {}.",
        total_score,
        confirmations.regime.as_str(),
        if confirmations.volume_confirmed {
            "CONFIRMED"
        } else {
            "WEAK"
        },
        if confirmations.pattern_confirmed {
            "STRONG"
        } else {
            "NEUTRAL"
        },
    );

    Decision::Trade(Signal {
        action,
        confidence,
        strength,
        reason,
        entry_price: current_price,
        take_profit1,
        take_profit2,
        stop_loss,
        created_at: Utc::now(),
        status: SignalStatus::Active,
        position: PositionState::Open,
        outcome: None,
        max_profit_reached: current_price,
        hit_price: None,
        hit_at: None,
    })
}

/// Confidence for an actionable score: min(cap, max(floor, |score-50|*gain)).
/// The floor keeps borderline triggers reporting something usable.
pub fn confidence_for(total_score: f64, policy: &ScoringPolicy) -> f64 {
    let c = &policy.confidence;
    ((total_score - 50.0).abs() * c.gain).max(c.floor).min(c.cap)
}

/// ATR-scaled stop and target levels, rounded to cents.
///
/// The regime multiplier widens everything in a high-volatility regime, and
/// the risk-derived position-size multiplier tightens the stop / stretches
/// the targets as risk headroom grows. When ATR is unavailable the distances
/// fall back to fixed fractions of price, preserving the same ordering; the
/// generator never fails to produce levels.
fn price_levels(
    action: SignalAction,
    current_price: f64,
    atr: f64,
    confirmations: &Confirmations,
    policy: &ScoringPolicy,
) -> (f64, f64, f64) {
    let m = &policy.levels;
    let multiplier = if confirmations.regime == MarketRegime::HighVolatility {
        m.high_volatility
    } else {
        m.base
    };
    let size_multiplier = (1.0 + confirmations.risk_score / 100.0).max(0.1);

    let (sl_distance, tp1_distance, tp2_distance) = if atr > 0.0 {
        (
            atr * multiplier / size_multiplier,
            atr * multiplier * m.tp1_ratio * size_multiplier,
            atr * multiplier * m.tp2_ratio * size_multiplier,
        )
    } else {
        let base = current_price * m.fallback_sl_fraction;
        (base, base * m.tp1_ratio, base * m.tp2_ratio)
    };

    match action {
        SignalAction::Buy => (
            round_price(current_price - sl_distance),
            round_price(current_price + tp1_distance),
            round_price(current_price + tp2_distance),
        ),
        _ => (
            round_price(current_price + sl_distance),
            round_price(current_price - tp1_distance),
            round_price(current_price - tp2_distance),
        ),
    }
}

fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
