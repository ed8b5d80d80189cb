//! Main orchestration: one scoring pass from raw series to report.

use crate::config::ScoringPolicy;
use crate::error::EngineError;
use crate::indicators;
use crate::market::{classify_regime, session_at};
use crate::models::context::ContextSnapshot;
use crate::models::price::PriceSeries;
use crate::models::signal::{SignalAnalysis, SignalReport};
use crate::providers::advisory::{AdvisoryModel, AdvisoryOpinion, MarketSummary, RuleBasedAdvisor};
use crate::providers::{
    with_fallback, CorrelationProvider, HtfTrendProvider, NeutralProvider, SentimentProvider,
};
use crate::risk::{InMemoryRiskLedger, RiskLedger};
use crate::signals::decision::{decide, Confirmations, Decision};
use crate::signals::factors::compute_factors;
use crate::signals::scorer::total_score;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_TRADE_SIZE: f64 = 1.0;

/// The scoring engine. Stateless per pass; all mutable bookkeeping lives
/// behind the risk ledger.
pub struct SignalEngine {
    policy: ScoringPolicy,
    sentiment: Arc<dyn SentimentProvider>,
    correlation: Arc<dyn CorrelationProvider>,
    htf: Arc<dyn HtfTrendProvider>,
    advisory: Arc<dyn AdvisoryModel>,
    ledger: Arc<dyn RiskLedger>,
    provider_timeout: Duration,
}

impl SignalEngine {
    /// Engine with neutral providers, the rule-based advisor, and an
    /// in-memory ledger. Hosts swap parts in with the `with_*` builders.
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            sentiment: Arc::new(NeutralProvider),
            correlation: Arc::new(NeutralProvider),
            htf: Arc::new(NeutralProvider),
            advisory: Arc::new(RuleBasedAdvisor),
            ledger: Arc::new(InMemoryRiskLedger::new()),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_sentiment(mut self, provider: Arc<dyn SentimentProvider>) -> Self {
        self.sentiment = provider;
        self
    }

    pub fn with_correlation(mut self, provider: Arc<dyn CorrelationProvider>) -> Self {
        self.correlation = provider;
        self
    }

    pub fn with_htf(mut self, provider: Arc<dyn HtfTrendProvider>) -> Self {
        self.htf = provider;
        self
    }

    pub fn with_advisory(mut self, advisory: Arc<dyn AdvisoryModel>) -> Self {
        self.advisory = advisory;
        self
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn RiskLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Run one full scoring pass for a user.
    ///
    /// Provider failures degrade to neutral defaults; only structurally
    /// invalid input errors out.
    pub async fn generate_signal(
        &self,
        series: &PriceSeries,
        user_id: &str,
    ) -> Result<SignalReport, EngineError> {
        series.validate()?;

        let now = Utc::now();
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();
        let current_price = series.current_price;

        let volatility = indicators::realized_volatility(&closes);
        let atr = indicators::atr_default(&highs, &lows, &closes);
        let rsi = indicators::rsi_default(&closes);
        let pattern = indicators::candlestick_score(&closes, &highs, &lows);
        let volume = match series.volumes() {
            Some(volumes) => indicators::volume_score(&closes, &volumes),
            None => 0.0,
        };
        let regime = classify_regime(&closes);
        let session = session_at(now);

        // Independent lookups fan out concurrently; each falls back to its
        // neutral default on error or timeout.
        let timeout = self.provider_timeout;
        let (sentiment, correlation, htf, gate_score) = tokio::join!(
            with_fallback("sentiment", timeout, 50.0, self.sentiment.sentiment()),
            with_fallback("correlation", timeout, 0.0, self.correlation.correlation()),
            with_fallback(
                "htf",
                timeout,
                crate::models::context::HtfAlignment::neutral(),
                self.htf.alignment(),
            ),
            self.ledger
                .gate_score(user_id, DEFAULT_TRADE_SIZE, volatility),
        );

        let snapshot = ContextSnapshot {
            volatility,
            regime,
            session,
            sentiment_score: sentiment,
            htf,
            volume_score: volume,
            pattern_score: pattern,
            correlation_score: correlation,
            risk_gate_score: gate_score,
        };

        let summary = MarketSummary {
            current_price,
            regime,
            session,
            volatility,
            rsi,
            sma_fast: indicators::sma(&closes, 20),
            sma_slow: indicators::sma(&closes, 50),
            pattern_score: pattern,
        };
        let advisory = with_fallback(
            "advisory",
            timeout,
            AdvisoryOpinion::neutral(),
            self.advisory.propose(&summary),
        )
        .await
        .clamped();

        let factors = compute_factors(&snapshot, &closes, current_price, now);
        let score = total_score(&factors, &advisory, &self.policy);
        debug!(score, regime = regime.as_str(), "scoring pass complete");

        let confirmations = Confirmations::from_factors(
            factors.volume,
            factors.pattern,
            factors.risk_gate,
            regime,
            &self.policy,
        );
        let decision = decide(score, current_price, atr, &confirmations, &self.policy);

        let (signal, hold_reason) = match decision {
            Decision::Trade(signal) => {
                info!(
                    action = ?signal.action,
                    confidence = signal.confidence,
                    "actionable signal generated"
                );
                // Count the recommendation against the user's daily budget.
                self.ledger.record_trade(user_id, 0.0, true).await;
                (Some(signal), None)
            }
            Decision::Hold { reason } => {
                info!(reason = %reason, "holding");
                (None, Some(reason))
            }
        };

        let risk = self.ledger.dashboard(user_id).await;
        let (confidence, strength) = match &signal {
            Some(s) => (s.confidence, Some(s.strength)),
            None => (0.0, None),
        };

        Ok(SignalReport {
            signal,
            analysis: SignalAnalysis {
                total_score: score,
                factors,
                advisory,
                confidence,
                strength,
                regime,
                session,
                risk,
                hold_reason,
                generated_at: now,
            },
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}
