//! Trend indicators: moving averages and directional-movement strength.

pub mod strength;

pub use strength::trend_strength;

/// Arithmetic mean of the last `period` values. Returns 0 below the minimum
/// length.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period {
        return 0.0;
    }
    prices[prices.len() - period..].iter().sum::<f64>() / period as f64
}

/// Exponential moving average seeded with the first value,
/// smoothing constant k = 2 / (period + 1).
pub fn ema(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period {
        return 0.0;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut value = prices[0];
    for price in &prices[1..] {
        value = price * k + value * (1.0 - k);
    }
    value
}
