//! Directional-movement trend strength, ADX-style.

const WINDOW: usize = 14;

/// Trend strength over a 14-bar window, scaled 0-100.
///
/// Accumulates positive and negative directional movement, converts both to
/// directional indices and takes their normalized spread. A flat window
/// would divide by zero; that case returns the neutral 0.
pub fn trend_strength(prices: &[f64]) -> f64 {
    if prices.len() < WINDOW {
        return 0.0;
    }

    let n = prices.len();
    let mut plus_dm = 0.0;
    let mut minus_dm = 0.0;

    for i in 1..WINDOW {
        let up_move = prices[n - i] - prices[n - i - 1];
        let down_move = prices[n - i - 1] - prices[n - i];
        if up_move > down_move && up_move > 0.0 {
            plus_dm += up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm += down_move;
        }
    }

    let di_plus = (plus_dm / WINDOW as f64) * 100.0;
    let di_minus = (minus_dm / WINDOW as f64) * 100.0;
    let adx = (di_plus - di_minus).abs() / (di_plus + di_minus) * 100.0;

    if adx.is_nan() {
        0.0
    } else {
        adx
    }
}
