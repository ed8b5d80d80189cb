//! Local market-context analytics: regime classification, session clock,
//! key levels, and the economic-calendar proxy.

pub mod calendar;
pub mod levels;
pub mod regime;
pub mod session;

pub use calendar::calendar_score_at;
pub use levels::{key_levels, key_levels_score, KeyLevels};
pub use regime::{classify_regime, regime_score};
pub use session::session_at;
