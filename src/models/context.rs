//! Contextual market state consumed by the scorer.

use serde::{Deserialize, Serialize};

/// Classified market condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketRegime {
    StrongUptrend,
    StrongDowntrend,
    HighVolatility,
    Ranging,
    Consolidation,
}

impl MarketRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketRegime::StrongUptrend => "STRONG_UPTREND",
            MarketRegime::StrongDowntrend => "STRONG_DOWNTREND",
            MarketRegime::HighVolatility => "HIGH_VOLATILITY",
            MarketRegime::Ranging => "RANGING",
            MarketRegime::Consolidation => "CONSOLIDATION",
        }
    }
}

/// Trading session derived from the UTC clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradingSession {
    Asian,
    London,
    LondonNyOverlap,
    #[serde(rename = "NEWYORK")]
    NewYork,
    Overnight,
}

/// Higher-timeframe trend alignment: direction in {-1, 0, 1} plus how much
/// to trust it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HtfAlignment {
    pub score: i8,
    pub confidence: f64,
}

impl HtfAlignment {
    pub fn neutral() -> Self {
        Self {
            score: 0,
            confidence: 0.0,
        }
    }

    pub fn bullish(confidence: f64) -> Self {
        Self {
            score: 1,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn bearish(confidence: f64) -> Self {
        Self {
            score: -1,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Immutable bundle of contextual scalars valid for one scoring pass.
///
/// Built fresh per invocation by the engine's fan-out; each field falls
/// back to its documented neutral value when a provider fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSnapshot {
    /// Standard deviation of period-over-period returns.
    pub volatility: f64,
    pub regime: MarketRegime,
    pub session: TradingSession,
    /// 0..100, 50 is neutral.
    pub sentiment_score: f64,
    pub htf: HtfAlignment,
    /// Volume confirmation score, -25..25.
    pub volume_score: f64,
    /// Candlestick pattern score, -25..25.
    pub pattern_score: f64,
    /// Signed cross-asset correlation score, 0 is neutral.
    pub correlation_score: f64,
    /// Signed risk-gate score from the risk ledger.
    pub risk_gate_score: f64,
}
