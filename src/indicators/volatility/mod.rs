//! Volatility measures: ATR and return standard deviation.

/// Average True Range over the last `period` true ranges.
///
/// True range = max(high-low, |high-prevClose|, |low-prevClose|). When fewer
/// than `period` ranges exist the available ones are averaged; fewer than
/// two bars returns 0.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> f64 {
    let len = highs.len().min(lows.len()).min(closes.len());
    if len < 2 || period == 0 {
        return 0.0;
    }

    let mut true_ranges = Vec::with_capacity(len - 1);
    for i in 1..len {
        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        true_ranges.push(hl.max(hc).max(lc));
    }

    let window = true_ranges.len().min(period);
    let start = true_ranges.len() - window;
    true_ranges[start..].iter().sum::<f64>() / window as f64
}

/// ATR with the conventional 14-bar period.
pub fn atr_default(highs: &[f64], lows: &[f64], closes: &[f64]) -> f64 {
    atr(highs, lows, closes, 14)
}

/// Standard deviation of simple period-over-period returns. Fewer than two
/// prices returns 0.
pub fn realized_volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let mut returns = Vec::with_capacity(prices.len() - 1);
    for i in 1..prices.len() {
        if prices[i - 1] != 0.0 {
            returns.push((prices[i] - prices[i - 1]) / prices[i - 1]);
        }
    }
    if returns.is_empty() {
        return 0.0;
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance = returns
        .iter()
        .map(|r| (r - mean).powi(2))
        .sum::<f64>()
        / returns.len() as f64;
    variance.sqrt()
}
