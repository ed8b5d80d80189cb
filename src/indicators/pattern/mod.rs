//! Candlestick pattern recognition.

pub mod candlestick;
