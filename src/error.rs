//! Engine and provider error types.

use std::fmt;

/// Structural problems with caller-supplied input.
///
/// Anything recoverable (a provider being down, thin history) is handled
/// with neutral defaults instead and never reaches this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The price series contained no candles.
    EmptySeries,
    /// Timestamps were not strictly ascending at the given index.
    OutOfOrderTimestamps(usize),
    /// A price field was NaN or infinite at the given index.
    NonFinitePrice(usize),
    /// The shared current price was missing, non-finite, or non-positive.
    InvalidCurrentPrice(f64),
    /// A candle's high was below its low at the given index.
    InvertedRange(usize),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptySeries => write!(f, "price series is empty"),
            EngineError::OutOfOrderTimestamps(i) => {
                write!(f, "timestamps not strictly ascending at index {}", i)
            }
            EngineError::NonFinitePrice(i) => {
                write!(f, "non-finite price at index {}", i)
            }
            EngineError::InvalidCurrentPrice(p) => {
                write!(f, "invalid current price: {}", p)
            }
            EngineError::InvertedRange(i) => {
                write!(f, "candle high below low at index {}", i)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Failures from an external context or advisory provider.
///
/// These are logged and replaced by the provider's neutral default; they
/// never abort a scoring pass.
#[derive(Debug, Clone)]
pub enum ProviderError {
    Unavailable(String),
    Timeout,
    MalformedResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(msg) => write!(f, "provider unavailable: {}", msg),
            ProviderError::Timeout => write!(f, "provider call timed out"),
            ProviderError::MalformedResponse(msg) => {
                write!(f, "malformed provider response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProviderError {}
