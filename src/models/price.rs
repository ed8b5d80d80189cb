//! Price series input model and structural validation.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar. Volume is optional; not every feed carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Ordered candles plus the shared current price the engine trades against.
///
/// Indicators degrade gracefully on short histories; structurally invalid
/// input (unordered timestamps, non-finite prices) is rejected up front so
/// it can never produce garbage levels downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub candles: Vec<Candle>,
    pub current_price: f64,
}

impl PriceSeries {
    pub fn new(candles: Vec<Candle>, current_price: f64) -> Self {
        Self {
            candles,
            current_price,
        }
    }

    /// Reject structurally invalid input before it reaches the indicators.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.candles.is_empty() {
            return Err(EngineError::EmptySeries);
        }
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(EngineError::InvalidCurrentPrice(self.current_price));
        }
        for (i, candle) in self.candles.iter().enumerate() {
            let prices = [candle.open, candle.high, candle.low, candle.close];
            if prices.iter().any(|p| !p.is_finite()) {
                return Err(EngineError::NonFinitePrice(i));
            }
            if let Some(v) = candle.volume {
                if !v.is_finite() {
                    return Err(EngineError::NonFinitePrice(i));
                }
            }
            if candle.high < candle.low {
                return Err(EngineError::InvertedRange(i));
            }
            if i > 0 && candle.timestamp <= self.candles[i - 1].timestamp {
                return Err(EngineError::OutOfOrderTimestamps(i));
            }
        }
        Ok(())
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    /// Parallel volume series, present only when every candle carries one.
    pub fn volumes(&self) -> Option<Vec<f64>> {
        self.candles.iter().map(|c| c.volume).collect()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}
