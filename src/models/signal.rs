//! Signal entity, score factor breakdown, and engine report types.

use crate::models::context::{MarketRegime, TradingSession};
use crate::providers::advisory::AdvisoryOpinion;
use crate::risk::RiskDashboard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStrength {
    Strong,
    Moderate,
    Risky,
}

impl SignalStrength {
    /// Deterministic mapping from confidence: >80 STRONG, >60 MODERATE,
    /// else RISKY.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 80.0 {
            SignalStrength::Strong
        } else if confidence > 60.0 {
            SignalStrength::Moderate
        } else {
            SignalStrength::Risky
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStatus {
    Active,
    Completed,
    Cancelled,
}

/// Lifecycle state of a signal's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionState {
    Open,
    Tp1Hit,
    /// Breakeven stop taken out after TP1 locked partial profit.
    Tp1HitThenSl,
    Tp2Hit,
    SlHit,
}

impl PositionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PositionState::Tp1HitThenSl | PositionState::Tp2Hit | PositionState::SlHit
        )
    }
}

/// Terminal classification of a completed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeOutcome {
    Win,
    /// TP1 profit was locked before the breakeven stop triggered.
    PartialWin,
    Loss,
}

/// The engine's primary output entity.
///
/// Created by the decision generator with status ACTIVE; mutated only by
/// the lifecycle tracker (or an external cancellation) and frozen once
/// COMPLETED or CANCELLED. A HOLD never becomes one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub action: SignalAction,
    pub confidence: f64,
    pub strength: SignalStrength,
    /// Embeds the numeric score and regime for traceability.
    pub reason: String,
    pub entry_price: f64,
    pub take_profit1: f64,
    pub take_profit2: f64,
    /// Rewritten to the entry price once TP1 hits (breakeven lock).
    pub stop_loss: f64,
    pub created_at: DateTime<Utc>,
    pub status: SignalStatus,
    pub position: PositionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<TradeOutcome>,
    /// Best price reached while open: max for BUY, min for SELL. Analytics
    /// only; plays no part in outcome classification.
    pub max_profit_reached: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_at: Option<DateTime<Utc>>,
}

impl Signal {
    /// External cancellation. Ignored once the signal is already terminal.
    pub fn cancel(&mut self) {
        if self.status == SignalStatus::Active {
            self.status = SignalStatus::Cancelled;
        }
    }
}

/// Raw numeric contribution of every factor that influenced a decision.
/// Kept alongside the total score so any decision is inspectable post-hoc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreFactors {
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
}

impl ScoreFactors {
    /// Named view for audit logs and reports.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("volatility", self.volatility),
            ("regime", self.regime),
            ("htf", self.htf),
            ("key_levels", self.key_levels),
            ("volume", self.volume),
            ("sentiment", self.sentiment),
            ("calendar", self.calendar),
            ("pattern", self.pattern),
            ("risk_gate", self.risk_gate),
            ("correlation", self.correlation),
        ]
    }
}

/// Scoring-pass breakdown returned with every report, signal or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalAnalysis {
    pub total_score: f64,
    pub factors: ScoreFactors,
    pub advisory: AdvisoryOpinion,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<SignalStrength>,
    pub regime: MarketRegime,
    pub session: TradingSession,
    pub risk: RiskDashboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_reason: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Result of one scoring pass. `signal` is None for HOLD decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
    pub analysis: SignalAnalysis,
}
