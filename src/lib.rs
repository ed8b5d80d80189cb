//! Aurix: a deterministic trading-signal scoring engine.
//!
//! The pipeline runs one direction: raw price series -> indicators ->
//! weighted scorer (indicators + context) -> decision generator -> signal,
//! with a lifecycle tracker consuming price ticks against open signals.

pub mod config;
pub mod error;
pub mod indicators;
pub mod lifecycle;
pub mod logging;
pub mod market;
pub mod models;
pub mod providers;
pub mod risk;
pub mod signals;

pub use config::ScoringPolicy;
pub use error::{EngineError, ProviderError};
pub use models::context::{ContextSnapshot, HtfAlignment, MarketRegime, TradingSession};
pub use models::price::{Candle, PriceSeries};
pub use models::signal::{
    PositionState, ScoreFactors, Signal, SignalAction, SignalAnalysis, SignalReport, SignalStatus,
    SignalStrength, TradeOutcome,
};
pub use signals::engine::SignalEngine;
