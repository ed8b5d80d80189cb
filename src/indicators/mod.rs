//! Pure indicator math over raw price sequences.
//!
//! Every function here degrades to a documented neutral default when the
//! series is too short (SMA/EMA/ATR/volatility/trend-strength -> 0,
//! RSI -> 50, pattern/volume scores -> 0). None of them error or panic.

pub mod momentum;
pub mod pattern;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::rsi::{rsi, rsi_default};
pub use pattern::candlestick::candlestick_score;
pub use trend::{ema, sma, trend_strength};
pub use volatility::{atr, atr_default, realized_volatility};
pub use volume::volume_score;
