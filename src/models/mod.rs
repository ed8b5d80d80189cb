//! Shared data models spanning the engine layers.

pub mod context;
pub mod price;
pub mod signal;

pub use context::{ContextSnapshot, HtfAlignment, MarketRegime, TradingSession};
pub use price::{Candle, PriceSeries};
pub use signal::{
    PositionState, ScoreFactors, Signal, SignalAction, SignalAnalysis, SignalReport, SignalStatus,
    SignalStrength, TradeOutcome,
};
