//! Unit tests for ATR and realized volatility

use aurix::indicators::{atr, atr_default, realized_volatility};

#[test]
fn test_atr_insufficient_data_is_zero() {
    assert_eq!(atr(&[10.0], &[9.0], &[9.5], 14), 0.0);
    assert_eq!(atr(&[], &[], &[], 14), 0.0);
    assert_eq!(atr(&[10.0, 11.0], &[9.0, 10.0], &[9.5, 10.5], 0), 0.0);
}

#[test]
fn test_atr_averages_true_ranges() {
    let highs = vec![10.0, 12.0, 13.0];
    let lows = vec![9.0, 10.0, 11.0];
    let closes = vec![9.5, 11.0, 12.0];
    // TR1 = max(2.0, |12-9.5|, |10-9.5|) = 2.5; TR2 = max(2.0, 2.0, 0.0) = 2.0
    assert!((atr(&highs, &lows, &closes, 14) - 2.25).abs() < 1e-9);
}

#[test]
fn test_atr_window_limits_to_period() {
    // 30 bars: wide 10-point ranges then a calm 2-point tail. A 5-bar ATR
    // only sees the calm tail; the 14-bar default still reaches the wide
    // region.
    let mut highs = Vec::new();
    let mut lows = Vec::new();
    let mut closes = Vec::new();
    for i in 0..30 {
        let wide = i < 25;
        let range = if wide { 10.0 } else { 2.0 };
        highs.push(100.0 + range / 2.0);
        lows.push(100.0 - range / 2.0);
        closes.push(100.0);
    }
    assert!((atr(&highs, &lows, &closes, 5) - 2.0).abs() < 1e-9);
    assert!(atr_default(&highs, &lows, &closes) > 2.0);
}

#[test]
fn test_atr_includes_gaps_through_prev_close() {
    // Second bar gaps far above the first close; its true range must use
    // the close-to-high distance, not just high-low.
    let highs = vec![10.0, 20.0];
    let lows = vec![9.0, 19.5];
    let closes = vec![9.5, 19.8];
    assert!((atr(&highs, &lows, &closes, 14) - 10.5).abs() < 1e-9);
}

#[test]
fn test_volatility_insufficient_data_is_zero() {
    assert_eq!(realized_volatility(&[100.0]), 0.0);
    assert_eq!(realized_volatility(&[]), 0.0);
}

#[test]
fn test_volatility_constant_series_is_zero() {
    assert_eq!(realized_volatility(&[100.0; 20]), 0.0);
}

#[test]
fn test_volatility_constant_return_is_zero() {
    // One return only, so deviation from the mean is zero.
    assert!(realized_volatility(&[100.0, 101.0]).abs() < 1e-12);
}

#[test]
fn test_volatility_scales_with_swing_size() {
    let small: Vec<f64> = (0..40)
        .map(|i| if i % 2 == 0 { 100.0 } else { 100.5 })
        .collect();
    let large: Vec<f64> = (0..40)
        .map(|i| if i % 2 == 0 { 100.0 } else { 105.0 })
        .collect();
    assert!(realized_volatility(&large) > realized_volatility(&small));
    assert!(realized_volatility(&small) > 0.0);
}
