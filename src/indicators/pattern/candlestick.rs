//! Candlestick pattern scorer over synthetic candles.
//!
//! Opens are approximated by the previous close, so only parallel
//! close/high/low sequences are needed. Patterns are mutually exclusive;
//! evaluation order is Doji, Hammer, Shooting Star, Engulfing, and the
//! first match wins.

/// Score of the matched pattern: Doji -10 (indecision), Hammer +15,
/// Shooting Star -15, Bullish/Bearish Engulfing +/-20, no match 0.
pub fn candlestick_score(closes: &[f64], highs: &[f64], lows: &[f64]) -> f64 {
    let n = closes.len();
    if n < 5 || highs.len() < 5 || lows.len() < 5 {
        return 0.0;
    }

    let open = closes[n - 2];
    let close = closes[n - 1];
    let high = highs[highs.len() - 1];
    let low = lows[lows.len() - 1];

    let range = high - low;
    if range <= 0.0 {
        return 0.0;
    }

    // Doji: body is a sliver of the full range.
    if (open - close).abs() / range < 0.1 {
        return -10.0;
    }

    let body = (open - close).abs();
    let lower_wick = close - low;
    let upper_wick = high - close;

    // Hammer: long lower wick, stubby upper wick (bullish reversal).
    if lower_wick > body * 2.0 && upper_wick < body * 0.5 {
        return 15.0;
    }

    // Shooting star: the mirror image (bearish reversal).
    if upper_wick > body * 2.0 && lower_wick < body * 0.5 {
        return -15.0;
    }

    // Engulfing: latest body fully swallows and reverses the prior body.
    // The synthetic open equals the prior close, so the shared edge is
    // compared non-strictly; only the far edge must actually be exceeded.
    let prev_open = closes[n - 3];
    let prev_close = closes[n - 2];

    if prev_close < prev_open && open <= prev_close && close > prev_open {
        return 20.0;
    }
    if prev_close > prev_open && open >= prev_close && close < prev_open {
        return -20.0;
    }

    0.0
}
