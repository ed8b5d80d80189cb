//! Position lifecycle tracking for open signals.
//!
//! One tick per call; callers serialize ticks per signal. Transitions are
//! monotonic (a hit level never un-hits) and re-applying the same price is
//! a no-op, so the tracker is safe to drive from at-least-once feeds.

use crate::models::signal::{
    PositionState, Signal, SignalAction, SignalStatus, TradeOutcome,
};
use chrono::Utc;

/// Apply a price tick to a signal and return the updated signal.
///
/// From OPEN, crossing TP1 locks the stop to the entry price (breakeven
/// lock) before anything else; a tick that gaps through TP2 resolves TP1
/// first, then TP2, in the same call. Once TP1 has locked profit, a later
/// stop-out is a PARTIAL_WIN, never a LOSS. Terminal signals pass through
/// untouched.
pub fn update(mut signal: Signal, current_price: f64) -> Signal {
    if signal.status != SignalStatus::Active || signal.position.is_terminal() {
        return signal;
    }
    if !current_price.is_finite() {
        return signal;
    }

    track_max_profit(&mut signal, current_price);

    let is_buy = signal.action == SignalAction::Buy;

    if signal.position == PositionState::Open {
        if crossed_up(is_buy, current_price, signal.take_profit1) {
            signal.position = PositionState::Tp1Hit;
            // Breakeven lock: protect the TP1 profit the moment it exists.
            signal.stop_loss = signal.entry_price;
        } else if crossed_down(is_buy, current_price, signal.stop_loss) {
            finish(&mut signal, PositionState::SlHit, TradeOutcome::Loss, current_price);
            return signal;
        }
    }

    if signal.position == PositionState::Tp1Hit {
        if crossed_up(is_buy, current_price, signal.take_profit2) {
            finish(&mut signal, PositionState::Tp2Hit, TradeOutcome::Win, current_price);
        } else if crossed_down(is_buy, current_price, signal.stop_loss) {
            finish(
                &mut signal,
                PositionState::Tp1HitThenSl,
                TradeOutcome::PartialWin,
                current_price,
            );
        }
    }

    signal
}

/// Profit-side crossing: >= target for BUY, <= for SELL.
fn crossed_up(is_buy: bool, price: f64, level: f64) -> bool {
    if is_buy {
        price >= level
    } else {
        price <= level
    }
}

/// Loss-side crossing: <= stop for BUY, >= for SELL.
fn crossed_down(is_buy: bool, price: f64, level: f64) -> bool {
    if is_buy {
        price <= level
    } else {
        price >= level
    }
}

fn track_max_profit(signal: &mut Signal, current_price: f64) {
    signal.max_profit_reached = if signal.action == SignalAction::Buy {
        signal.max_profit_reached.max(current_price)
    } else {
        signal.max_profit_reached.min(current_price)
    };
}

fn finish(
    signal: &mut Signal,
    state: PositionState,
    outcome: TradeOutcome,
    current_price: f64,
) {
    signal.position = state;
    signal.outcome = Some(outcome);
    signal.status = SignalStatus::Completed;
    signal.hit_price = Some(current_price);
    signal.hit_at = Some(Utc::now());
}
