//! Unit tests for model serialization and wire naming

use aurix::lifecycle::update;
use aurix::models::context::{MarketRegime, TradingSession};
use aurix::models::signal::{
    PositionState, Signal, SignalAction, SignalStatus, SignalStrength, TradeOutcome,
};
use chrono::Utc;
use serde_json::json;

fn open_signal() -> Signal {
    Signal {
        action: SignalAction::Buy,
        confidence: 60.0,
        strength: SignalStrength::Risky,
        reason: "test".to_string(),
        entry_price: 2650.0,
        take_profit1: 2660.0,
        take_profit2: 2670.0,
        stop_loss: 2640.0,
        created_at: Utc::now(),
        status: SignalStatus::Active,
        position: PositionState::Open,
        outcome: None,
        max_profit_reached: 2650.0,
        hit_price: None,
        hit_at: None,
    }
}

#[test]
fn test_enum_wire_names() {
    assert_eq!(
        serde_json::to_value(TradingSession::NewYork).unwrap(),
        json!("NEWYORK")
    );
    assert_eq!(
        serde_json::to_value(TradingSession::LondonNyOverlap).unwrap(),
        json!("LONDON_NY_OVERLAP")
    );
    assert_eq!(
        serde_json::to_value(MarketRegime::StrongUptrend).unwrap(),
        json!("STRONG_UPTREND")
    );
    assert_eq!(
        serde_json::to_value(PositionState::Tp1HitThenSl).unwrap(),
        json!("TP1_HIT_THEN_SL")
    );
    assert_eq!(
        serde_json::to_value(TradeOutcome::PartialWin).unwrap(),
        json!("PARTIAL_WIN")
    );
}

#[test]
fn test_open_signal_omits_terminal_fields() {
    let value = serde_json::to_value(open_signal()).unwrap();
    assert_eq!(value["action"], json!("BUY"));
    assert_eq!(value["status"], json!("ACTIVE"));
    assert_eq!(value["position"], json!("OPEN"));
    assert!(value.get("outcome").is_none());
    assert!(value.get("hit_price").is_none());
    assert!(value.get("hit_at").is_none());
}

#[test]
fn test_completed_signal_carries_outcome() {
    // TP1 then the breakeven stop.
    let signal = update(open_signal(), 2661.0);
    let signal = update(signal, 2650.0);
    let value = serde_json::to_value(&signal).unwrap();
    assert_eq!(value["position"], json!("TP1_HIT_THEN_SL"));
    assert_eq!(value["outcome"], json!("PARTIAL_WIN"));
    assert_eq!(value["hit_price"], json!(2650.0));
    assert_eq!(value["status"], json!("COMPLETED"));
}

#[test]
fn test_signal_round_trips_through_json() {
    let signal = open_signal();
    let text = serde_json::to_string(&signal).unwrap();
    let back: Signal = serde_json::from_str(&text).unwrap();
    assert_eq!(back.action, signal.action);
    assert_eq!(back.status, signal.status);
    assert_eq!(back.entry_price, signal.entry_price);
    assert_eq!(back.stop_loss, signal.stop_loss);
    assert!(back.outcome.is_none());
}
