//! Advisory opinion delegate.
//!
//! Stands in for any external reasoning component (rule engine, statistical
//! model, LLM). The engine treats implementations as opaque oracles and
//! clamps whatever comes back.

use crate::error::ProviderError;
use crate::models::context::{MarketRegime, TradingSession};
use crate::models::signal::SignalAction;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Compact market-state summary handed to the delegate.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub current_price: f64,
    pub regime: MarketRegime,
    pub session: TradingSession,
    pub volatility: f64,
    pub rsi: f64,
    pub sma_fast: f64,
    pub sma_slow: f64,
    pub pattern_score: f64,
}

/// The delegate's directional opinion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryOpinion {
    pub action: SignalAction,
    pub confidence: f64,
    pub reason: String,
}

impl AdvisoryOpinion {
    /// Fallback when the delegate is unreachable or returns garbage.
    pub fn neutral() -> Self {
        Self {
            action: SignalAction::Hold,
            confidence: 50.0,
            reason: "advisory unavailable".to_string(),
        }
    }

    /// Validate an opinion from an untrusted source: unknown actions become
    /// HOLD, confidence is clamped to [1, 100].
    pub fn from_parts(action: &str, confidence: f64, reason: impl Into<String>) -> Self {
        let action = match action.trim().to_ascii_uppercase().as_str() {
            "BUY" => SignalAction::Buy,
            "SELL" => SignalAction::Sell,
            _ => SignalAction::Hold,
        };
        Self {
            action,
            confidence: if confidence.is_finite() {
                confidence.clamp(1.0, 100.0)
            } else {
                50.0
            },
            reason: reason.into(),
        }
    }

    /// Clamp an already-typed opinion into contract bounds.
    pub fn clamped(mut self) -> Self {
        self.confidence = if self.confidence.is_finite() {
            self.confidence.clamp(1.0, 100.0)
        } else {
            50.0
        };
        self
    }
}

/// Opaque advisory delegate contract.
#[async_trait]
pub trait AdvisoryModel: Send + Sync {
    async fn propose(&self, summary: &MarketSummary) -> Result<AdvisoryOpinion, ProviderError>;
}

/// Built-in rule-based delegate: RSI extremes filtered by regime.
///
/// Deliberately conservative so that a missing external model biases the
/// advisory factor toward neutral rather than inventing conviction.
pub struct RuleBasedAdvisor;

#[async_trait]
impl AdvisoryModel for RuleBasedAdvisor {
    async fn propose(&self, summary: &MarketSummary) -> Result<AdvisoryOpinion, ProviderError> {
        let trend_up = summary.sma_fast > summary.sma_slow && summary.sma_slow > 0.0;
        let trend_down = summary.sma_fast < summary.sma_slow && summary.sma_fast > 0.0;

        let opinion = if summary.rsi < 30.0 && summary.regime != MarketRegime::StrongDowntrend {
            AdvisoryOpinion {
                action: SignalAction::Buy,
                confidence: 55.0 + (30.0 - summary.rsi),
                reason: format!("RSI oversold at {:.1} outside a strong downtrend", summary.rsi),
            }
        } else if summary.rsi > 70.0 && summary.regime != MarketRegime::StrongUptrend {
            AdvisoryOpinion {
                action: SignalAction::Sell,
                confidence: 55.0 + (summary.rsi - 70.0),
                reason: format!("RSI overbought at {:.1} outside a strong uptrend", summary.rsi),
            }
        } else if summary.regime == MarketRegime::StrongUptrend && trend_up {
            AdvisoryOpinion {
                action: SignalAction::Buy,
                confidence: 62.0,
                reason: "strong uptrend with aligned moving averages".to_string(),
            }
        } else if summary.regime == MarketRegime::StrongDowntrend && trend_down {
            AdvisoryOpinion {
                action: SignalAction::Sell,
                confidence: 62.0,
                reason: "strong downtrend with aligned moving averages".to_string(),
            }
        } else {
            AdvisoryOpinion {
                action: SignalAction::Hold,
                confidence: 50.0,
                reason: "no conviction from momentum or trend".to_string(),
            }
        };

        Ok(opinion.clamped())
    }
}
