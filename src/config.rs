//! Scoring policy configuration.
//!
//! All tunable constants live here as data so alternate weight tables and
//! threshold sets can coexist as versioned policies instead of code forks.

use serde::{Deserialize, Serialize};

/// Fixed weight table applied by the scorer. Sums to roughly 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorWeights {
    pub volatility: f64,
    pub regime: f64,
    pub htf: f64,
    pub key_levels: f64,
    pub volume: f64,
    pub sentiment: f64,
    pub calendar: f64,
    pub pattern: f64,
    pub risk_gate: f64,
    pub correlation: f64,
    pub advisory: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            volatility: 0.07,
            regime: 0.10,
            htf: 0.08,
            key_levels: 0.09,
            volume: 0.12,
            sentiment: 0.06,
            calendar: 0.07,
            pattern: 0.10,
            risk_gate: 0.11,
            correlation: 0.08,
            advisory: 0.12,
        }
    }
}

/// Score thresholds for the decision ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Buy/sell bounds when volume is confirmed.
    pub volume_buy: f64,
    pub volume_sell: f64,
    /// Buy/sell bounds when a candlestick pattern is confirmed.
    pub pattern_buy: f64,
    pub pattern_sell: f64,
    /// Unconditional buy/sell bounds.
    pub bare_buy: f64,
    pub bare_sell: f64,
    /// Volume factor above which volume counts as confirmed.
    pub volume_confirm: f64,
    /// Absolute pattern factor above which a pattern counts as confirmed.
    pub pattern_confirm: f64,
    /// Risk-gate factor below which trading is hard-blocked.
    pub risk_block: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            volume_buy: 65.0,
            volume_sell: 35.0,
            pattern_buy: 75.0,
            pattern_sell: 25.0,
            bare_buy: 60.0,
            bare_sell: 40.0,
            volume_confirm: 10.0,
            pattern_confirm: 10.0,
            risk_block: -20.0,
        }
    }
}

/// ATR multipliers for stop/target distances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelMultipliers {
    /// Base ATR multiplier for most regimes.
    pub base: f64,
    /// Wider multiplier applied in a high-volatility regime.
    pub high_volatility: f64,
    /// TP1 distance as a ratio of the stop distance base. Must keep TP1
    /// nearer than TP2.
    pub tp1_ratio: f64,
    pub tp2_ratio: f64,
    /// Stop distance as a fraction of price when ATR is unavailable.
    pub fallback_sl_fraction: f64,
}

impl Default for LevelMultipliers {
    fn default() -> Self {
        Self {
            base: 1.5,
            high_volatility: 2.0,
            tp1_ratio: 1.2,
            tp2_ratio: 2.5,
            fallback_sl_fraction: 0.002,
        }
    }
}

/// Confidence formula parameters: min(cap, max(floor, |score - 50| * gain)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceParams {
    pub floor: f64,
    pub cap: f64,
    pub gain: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            floor: 60.0,
            cap: 95.0,
            gain: 1.8,
        }
    }
}

/// A complete, versionable scoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub weights: FactorWeights,
    pub thresholds: DecisionThresholds,
    pub levels: LevelMultipliers,
    pub confidence: ConfidenceParams,
}

impl ScoringPolicy {
    /// Flat penalty subtracted from the total score when the risk gate is
    /// below the block threshold. Keeps risk breaches from being out-voted
    /// by bullish technicals.
    pub const RISK_PENALTY: f64 = 15.0;
}

/// Deployment environment, read from `APP_ENV` (defaults to "sandbox").
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
