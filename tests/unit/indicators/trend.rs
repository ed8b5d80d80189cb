//! Unit tests for moving averages and trend strength

use aurix::indicators::{ema, sma, trend_strength};

#[test]
fn test_sma_insufficient_data_is_zero() {
    assert_eq!(sma(&[1.0, 2.0], 5), 0.0);
    assert_eq!(sma(&[], 1), 0.0);
    assert_eq!(sma(&[1.0, 2.0], 0), 0.0);
}

#[test]
fn test_sma_uses_last_period_values() {
    let prices = vec![10.0, 10.0, 10.0, 1.0, 2.0, 3.0];
    assert_eq!(sma(&prices, 3), 2.0);
}

#[test]
fn test_sma_full_window() {
    let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&prices, 5), 3.0);
}

#[test]
fn test_ema_insufficient_data_is_zero() {
    assert_eq!(ema(&[1.0, 2.0], 5), 0.0);
}

#[test]
fn test_ema_constant_series_is_constant() {
    let prices = vec![5.0; 30];
    assert!((ema(&prices, 12) - 5.0).abs() < 1e-9);
}

#[test]
fn test_ema_tracks_recent_prices_closer_than_sma() {
    // Long flat history followed by a jump: the EMA leans toward the jump.
    let mut prices = vec![100.0; 40];
    prices.extend([110.0; 10]);
    let e = ema(&prices, 12);
    let s = sma(&prices, 50);
    assert!(e > s);
    assert!(e <= 110.0);
}

#[test]
fn test_trend_strength_insufficient_data_is_zero() {
    let prices = vec![100.0; 10];
    assert_eq!(trend_strength(&prices), 0.0);
}

#[test]
fn test_trend_strength_flat_series_is_zero() {
    let prices = vec![100.0; 30];
    assert_eq!(trend_strength(&prices), 0.0);
}

#[test]
fn test_trend_strength_monotonic_series_is_max() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert_eq!(trend_strength(&prices), 100.0);
    let falling: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
    assert_eq!(trend_strength(&falling), 100.0);
}

#[test]
fn test_trend_strength_choppy_is_weak() {
    let prices: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    assert!(trend_strength(&prices) < 30.0);
}
