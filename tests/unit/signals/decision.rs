//! Unit tests for the decision ladder and price levels

use aurix::config::ScoringPolicy;
use aurix::models::context::MarketRegime;
use aurix::models::signal::{PositionState, SignalAction, SignalStatus, SignalStrength};
use aurix::signals::decision::{confidence_for, decide, Confirmations, Decision};

fn confirmations(volume: bool, pattern: bool) -> Confirmations {
    Confirmations {
        volume_confirmed: volume,
        pattern_confirmed: pattern,
        risk_blocked: false,
        risk_score: 0.0,
        regime: MarketRegime::Ranging,
    }
}

#[test]
fn test_volume_confirmed_buy_with_levels() {
    let policy = ScoringPolicy::default();
    let conf = confirmations(true, false);
    let signal = decide(70.0, 2650.0, 5.0, &conf, &policy)
        .signal()
        .unwrap();

    assert_eq!(signal.action, SignalAction::Buy);
    assert_eq!(signal.entry_price, 2650.0);
    assert_eq!(signal.stop_loss, 2642.5);
    assert_eq!(signal.take_profit1, 2659.0);
    assert_eq!(signal.take_profit2, 2668.75);
    assert_eq!(signal.confidence, 60.0);
    assert_eq!(signal.strength, SignalStrength::Risky);
    assert_eq!(signal.status, SignalStatus::Active);
    assert_eq!(signal.position, PositionState::Open);
    assert_eq!(signal.max_profit_reached, 2650.0);
    assert!(signal.reason.contains("Score 70.0/100"));
    assert!(signal.reason.contains("RANGING"));
    assert!(signal.reason.contains("Volume: CONFIRMED"));
}

#[test]
fn test_volume_confirmed_sell() {
    let policy = ScoringPolicy::default();
    let signal = decide(34.0, 2650.0, 5.0, &confirmations(true, false), &policy)
        .signal()
        .unwrap();
    assert_eq!(signal.action, SignalAction::Sell);
    // Mirror levels: stop above entry, targets below, TP2 beyond TP1.
    assert!(signal.stop_loss > signal.entry_price);
    assert!(signal.take_profit1 < signal.entry_price);
    assert!(signal.take_profit2 < signal.take_profit1);
}

#[test]
fn test_pattern_confirmed_needs_wider_bounds() {
    let policy = ScoringPolicy::default();
    // 76 clears the pattern rung without volume confirmation.
    let buy = decide(76.0, 100.0, 1.0, &confirmations(false, true), &policy);
    assert!(matches!(buy, Decision::Trade(ref s) if s.action == SignalAction::Buy));

    let sell = decide(24.0, 100.0, 1.0, &confirmations(false, true), &policy);
    assert!(matches!(sell, Decision::Trade(ref s) if s.action == SignalAction::Sell));
}

#[test]
fn test_bare_thresholds() {
    let policy = ScoringPolicy::default();
    let buy = decide(61.0, 100.0, 1.0, &confirmations(false, false), &policy);
    assert!(matches!(buy, Decision::Trade(ref s) if s.action == SignalAction::Buy));

    let sell = decide(39.0, 100.0, 1.0, &confirmations(false, false), &policy);
    assert!(matches!(sell, Decision::Trade(ref s) if s.action == SignalAction::Sell));
}

#[test]
fn test_midband_score_holds() {
    let policy = ScoringPolicy::default();
    match decide(50.0, 100.0, 1.0, &confirmations(true, true), &policy) {
        Decision::Hold { reason } => assert!(reason.contains("waiting for confirmation")),
        Decision::Trade(_) => panic!("midband score must hold"),
    }
}

#[test]
fn test_boundary_scores_hold_without_confirmation() {
    let policy = ScoringPolicy::default();
    // 60 and 40 sit exactly on the bare bounds; both hold.
    assert!(decide(60.0, 100.0, 1.0, &confirmations(false, false), &policy)
        .signal()
        .is_none());
    assert!(decide(40.0, 100.0, 1.0, &confirmations(false, false), &policy)
        .signal()
        .is_none());
}

#[test]
fn test_risk_block_overrides_everything() {
    let policy = ScoringPolicy::default();
    let mut conf = confirmations(true, true);
    conf.risk_blocked = true;
    match decide(95.0, 100.0, 1.0, &conf, &policy) {
        Decision::Hold { reason } => assert!(reason.contains("risk limits exceeded")),
        Decision::Trade(_) => panic!("risk block must hold"),
    }
}

#[test]
fn test_high_volatility_regime_widens_levels() {
    let policy = ScoringPolicy::default();
    let mut conf = confirmations(true, false);
    conf.regime = MarketRegime::HighVolatility;
    let signal = decide(70.0, 2650.0, 5.0, &conf, &policy).signal().unwrap();
    // Multiplier 2.0 instead of 1.5.
    assert_eq!(signal.stop_loss, 2640.0);
    assert_eq!(signal.take_profit1, 2662.0);
    assert_eq!(signal.take_profit2, 2675.0);
}

#[test]
fn test_positive_risk_headroom_tightens_stop_and_stretches_targets() {
    let policy = ScoringPolicy::default();
    let mut conf = confirmations(true, false);
    conf.risk_score = 10.0;
    let signal = decide(70.0, 2650.0, 5.0, &conf, &policy).signal().unwrap();
    assert!(signal.stop_loss > 2642.5);
    assert!(signal.take_profit1 > 2659.0);
    assert!(signal.take_profit2 > 2668.75);
}

#[test]
fn test_zero_atr_falls_back_to_price_fraction() {
    let policy = ScoringPolicy::default();
    let signal = decide(70.0, 1000.0, 0.0, &confirmations(true, false), &policy)
        .signal()
        .unwrap();
    // Base distance 0.2% of price, TP ratios preserved.
    assert_eq!(signal.stop_loss, 998.0);
    assert_eq!(signal.take_profit1, 1002.4);
    assert_eq!(signal.take_profit2, 1005.0);
}

#[test]
fn test_buy_level_ordering_invariant() {
    let policy = ScoringPolicy::default();
    for score in [61.0, 70.0, 85.0, 99.0] {
        let signal = decide(score, 2650.0, 5.0, &confirmations(true, false), &policy)
            .signal()
            .unwrap();
        assert!(signal.stop_loss < signal.entry_price);
        assert!(signal.entry_price < signal.take_profit1);
        assert!(signal.take_profit1 < signal.take_profit2);
    }
}

#[test]
fn test_confidence_formula() {
    let policy = ScoringPolicy::default();
    // Floor at 60 for weak deviations.
    assert_eq!(confidence_for(70.0, &policy), 60.0);
    assert_eq!(confidence_for(50.0, &policy), 60.0);
    // |85-50| * 1.8 = 63
    assert_eq!(confidence_for(85.0, &policy), 63.0);
    // |5-50| * 1.8 = 81, symmetric around 50
    assert_eq!(confidence_for(5.0, &policy), 81.0);
    // |100-50| * 1.8 = 90, under the 95 cap
    assert_eq!(confidence_for(100.0, &policy), 90.0);
}

#[test]
fn test_strength_follows_confidence() {
    assert_eq!(SignalStrength::from_confidence(90.0), SignalStrength::Strong);
    assert_eq!(SignalStrength::from_confidence(80.0), SignalStrength::Moderate);
    assert_eq!(SignalStrength::from_confidence(63.0), SignalStrength::Moderate);
    assert_eq!(SignalStrength::from_confidence(60.0), SignalStrength::Risky);

    let policy = ScoringPolicy::default();
    let conf = confirmations(true, false);
    let moderate = decide(85.0, 100.0, 1.0, &conf, &policy).signal().unwrap();
    assert_eq!(moderate.strength, SignalStrength::Moderate);
}
