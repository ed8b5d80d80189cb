//! Market regime classification from the close series.

use crate::indicators::{realized_volatility, sma, trend_strength};
use crate::models::context::MarketRegime;

const MIN_BARS: usize = 50;

/// Classify the current market regime.
///
/// Needs at least 50 bars; shorter histories default to RANGING. Strong
/// trends require aligned SMAs, calm volatility, and meaningful
/// directional-movement strength.
pub fn classify_regime(closes: &[f64]) -> MarketRegime {
    if closes.len() < MIN_BARS {
        return MarketRegime::Ranging;
    }

    let sma20 = sma(closes, 20);
    let sma50 = sma(closes, 50);
    let current = closes[closes.len() - 1];
    let volatility = realized_volatility(closes);
    let strength = trend_strength(closes);

    if current > sma20 && sma20 > sma50 && volatility < 0.015 && strength > 25.0 {
        return MarketRegime::StrongUptrend;
    }
    if current < sma20 && sma20 < sma50 && volatility < 0.015 && strength > 25.0 {
        return MarketRegime::StrongDowntrend;
    }
    if volatility > 0.025 {
        return MarketRegime::HighVolatility;
    }
    if strength < 15.0 {
        return MarketRegime::Consolidation;
    }
    MarketRegime::Ranging
}

/// Scoring contribution of each regime.
pub fn regime_score(regime: MarketRegime) -> f64 {
    match regime {
        MarketRegime::StrongUptrend => 20.0,
        MarketRegime::StrongDowntrend => -20.0,
        MarketRegime::HighVolatility => -10.0,
        MarketRegime::Consolidation => 2.0,
        MarketRegime::Ranging => 5.0,
    }
}
