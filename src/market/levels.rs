//! Support/resistance key levels from recent closes.

const LOOKBACK: usize = 20;
const PROXIMITY: f64 = 0.002;

#[derive(Debug, Clone, Copy)]
pub struct KeyLevels {
    pub support: f64,
    pub resistance: f64,
    pub pivot: f64,
}

/// Support and resistance from the last 20 closes, padded outward by 0.2%.
pub fn key_levels(closes: &[f64]) -> KeyLevels {
    if closes.is_empty() {
        return KeyLevels {
            support: 0.0,
            resistance: 0.0,
            pivot: 0.0,
        };
    }
    let start = closes.len().saturating_sub(LOOKBACK);
    let recent = &closes[start..];
    let min = recent.iter().cloned().fold(f64::MAX, f64::min);
    let max = recent.iter().cloned().fold(f64::MIN, f64::max);
    KeyLevels {
        support: min * 0.998,
        resistance: max * 1.002,
        pivot: (min + max + closes[closes.len() - 1]) / 3.0,
    }
}

/// +15 within 0.2% of support, -15 within 0.2% of resistance, else 0.
pub fn key_levels_score(closes: &[f64], current_price: f64) -> f64 {
    let levels = key_levels(closes);
    if (levels.support == 0.0 && levels.resistance == 0.0) || current_price <= 0.0 {
        return 0.0;
    }

    let to_support = (current_price - levels.support).abs() / current_price;
    let to_resistance = (current_price - levels.resistance).abs() / current_price;

    if to_support < PROXIMITY {
        15.0
    } else if to_resistance < PROXIMITY {
        -15.0
    } else {
        0.0
    }
}
