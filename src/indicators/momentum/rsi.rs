//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss, Wilder-smoothed.

/// Calculate RSI with Wilder smoothing.
///
/// Seeds the average gain/loss from the first `period` deltas, then applies
/// exponential smoothing over the remainder. Insufficient data returns the
/// neutral 50; a series with no losses returns 100.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() <= period {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;
    let smoothing = (period - 1) as f64;

    for i in (period + 1)..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            avg_gain = (avg_gain * smoothing + change) / period as f64;
            avg_loss = (avg_loss * smoothing) / period as f64;
        } else {
            avg_loss = (avg_loss * smoothing - change) / period as f64;
            avg_gain = (avg_gain * smoothing) / period as f64;
        }
    }

    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
}

/// RSI with the conventional 14-bar period.
pub fn rsi_default(prices: &[f64]) -> f64 {
    rsi(prices, 14)
}
