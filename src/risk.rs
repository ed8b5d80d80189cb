//! Per-user risk ledger.
//!
//! The engine itself stays stateless: it reads a gate score from the ledger
//! and reports recommended updates back through it. The in-memory
//! implementation serializes per-user updates behind one RwLock map and
//! resets counters at the start of each UTC day.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

const MAX_DAILY_LOSS_PCT: f64 = -2.0;
const MAX_TRADES_PER_DAY: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Read-only risk status for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskDashboard {
    pub daily_pnl: f64,
    pub trades_today: u32,
    pub risk_level: RiskLevel,
    pub can_trade: bool,
}

/// Risk bookkeeping seam. Hosts may back this with any keyed store; the
/// engine only ever talks through the trait.
#[async_trait]
pub trait RiskLedger: Send + Sync {
    /// Signed gate score fed into the scorer's risk factor.
    async fn gate_score(&self, user_id: &str, trade_size: f64, volatility: f64) -> f64;

    /// Record a realized PnL change and/or an executed trade.
    async fn record_trade(&self, user_id: &str, pnl_change: f64, trade_executed: bool);

    async fn dashboard(&self, user_id: &str) -> RiskDashboard;
}

#[derive(Debug, Clone, Copy)]
struct UserRiskState {
    day: NaiveDate,
    daily_pnl: f64,
    trades_today: u32,
}

impl UserRiskState {
    fn fresh(day: NaiveDate) -> Self {
        Self {
            day,
            daily_pnl: 0.0,
            trades_today: 0,
        }
    }
}

/// Process-local ledger keyed by user id.
pub struct InMemoryRiskLedger {
    users: RwLock<HashMap<String, UserRiskState>>,
}

impl InMemoryRiskLedger {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Gate score evaluated at an explicit instant. Counters reset when the
    /// UTC day rolls over.
    pub async fn gate_score_at(
        &self,
        user_id: &str,
        trade_size: f64,
        volatility: f64,
        now: DateTime<Utc>,
    ) -> f64 {
        let state = self.state_for(user_id, now.date_naive()).await;

        let mut score: f64 = 10.0;

        // Max daily loss protection.
        if state.daily_pnl < MAX_DAILY_LOSS_PCT {
            score -= 30.0;
        }
        // Max trades per day.
        if state.trades_today >= MAX_TRADES_PER_DAY {
            score -= 25.0;
        }
        // Position size relative to account.
        if trade_size > 5.0 {
            score -= 15.0;
        }
        // Volatility-adjusted sizing.
        if volatility > 0.025 && trade_size > 2.0 {
            score -= 20.0;
        }

        score.clamp(-50.0, 20.0)
    }

    pub async fn record_trade_at(
        &self,
        user_id: &str,
        pnl_change: f64,
        trade_executed: bool,
        now: DateTime<Utc>,
    ) {
        let today = now.date_naive();
        let mut users = self.users.write().await;
        let state = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserRiskState::fresh(today));
        if state.day != today {
            *state = UserRiskState::fresh(today);
        }
        state.daily_pnl += pnl_change;
        if trade_executed {
            state.trades_today += 1;
        }
    }

    pub async fn dashboard_at(&self, user_id: &str, now: DateTime<Utc>) -> RiskDashboard {
        let state = self.state_for(user_id, now.date_naive()).await;

        let risk_level = if state.daily_pnl < -1.5 {
            RiskLevel::High
        } else if state.daily_pnl < -0.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        RiskDashboard {
            daily_pnl: state.daily_pnl,
            trades_today: state.trades_today,
            risk_level,
            can_trade: state.daily_pnl >= MAX_DAILY_LOSS_PCT
                && state.trades_today < MAX_TRADES_PER_DAY,
        }
    }

    /// Current state for a user, resetting stale days on read.
    async fn state_for(&self, user_id: &str, today: NaiveDate) -> UserRiskState {
        {
            let users = self.users.read().await;
            if let Some(state) = users.get(user_id) {
                if state.day == today {
                    return *state;
                }
            }
        }
        let mut users = self.users.write().await;
        let state = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserRiskState::fresh(today));
        if state.day != today {
            *state = UserRiskState::fresh(today);
        }
        *state
    }
}

impl Default for InMemoryRiskLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RiskLedger for InMemoryRiskLedger {
    async fn gate_score(&self, user_id: &str, trade_size: f64, volatility: f64) -> f64 {
        self.gate_score_at(user_id, trade_size, volatility, Utc::now())
            .await
    }

    async fn record_trade(&self, user_id: &str, pnl_change: f64, trade_executed: bool) {
        self.record_trade_at(user_id, pnl_change, trade_executed, Utc::now())
            .await
    }

    async fn dashboard(&self, user_id: &str) -> RiskDashboard {
        self.dashboard_at(user_id, Utc::now()).await
    }
}
