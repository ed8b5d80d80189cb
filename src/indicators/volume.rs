//! Volume confirmation scoring over parallel close/volume series.

const AVG_WINDOW: usize = 20;
const DIVERGENCE_LOOKBACK: usize = 14;

/// Volume confirmation score, clamped to [-25, 25].
///
/// Compares the latest volume against its 20-bar average, rewards volume
/// spikes at price extremes, and penalizes price/volume divergence over a
/// 14-bar lookback. Fewer than ten volume bars returns the neutral 0.
pub fn volume_score(closes: &[f64], volumes: &[f64]) -> f64 {
    if volumes.len() < 10 || closes.is_empty() {
        return 0.0;
    }

    let recent_start = volumes.len().saturating_sub(AVG_WINDOW);
    let recent = &volumes[recent_start..];
    let avg_volume = recent.iter().sum::<f64>() / recent.len() as f64;
    if avg_volume <= 0.0 {
        return 0.0;
    }

    let current_volume = volumes[volumes.len() - 1];
    let volume_ratio = current_volume / avg_volume;
    let volume_increasing = current_volume > volumes[volumes.len() - 2] * 1.5;

    let last_close = closes[closes.len() - 1];
    let window_start = closes.len().saturating_sub(5);
    let window = &closes[window_start..];
    let window_max = window.iter().cloned().fold(f64::MIN, f64::max);
    let window_min = window.iter().cloned().fold(f64::MAX, f64::min);
    let at_extreme = volume_ratio > 1.5 && (last_close == window_max || last_close == window_min);

    let mut score: f64 = 0.0;

    if volume_ratio > 2.0 {
        score += 20.0;
    } else if volume_ratio > 1.5 {
        score += 10.0;
    } else if volume_ratio < 0.5 {
        score -= 10.0;
    }

    if volume_increasing {
        score += 5.0;
    }
    if at_extreme {
        score += 15.0;
    }

    if volumes.len() >= DIVERGENCE_LOOKBACK && closes.len() >= DIVERGENCE_LOOKBACK {
        let price_up = closes[closes.len() - 1] > closes[closes.len() - DIVERGENCE_LOOKBACK];
        let volume_down = current_volume < volumes[volumes.len() - DIVERGENCE_LOOKBACK];
        if price_up && volume_down {
            score -= 15.0;
        }
        if !price_up && !volume_down {
            score += 15.0;
        }
    }

    score.clamp(-25.0, 25.0)
}
