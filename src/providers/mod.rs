//! Asynchronous context providers.
//!
//! Each provider is an independent lookup with a documented neutral default.
//! The engine fans their calls out concurrently and substitutes the default
//! on error or timeout, so a dead provider can never abort a scoring pass.

pub mod advisory;

use crate::error::ProviderError;
use crate::models::context::HtfAlignment;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Market sentiment on a 0..100 scale. Neutral default: 50.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn sentiment(&self) -> Result<f64, ProviderError>;
}

/// Signed cross-asset correlation score. Neutral default: 0.
#[async_trait]
pub trait CorrelationProvider: Send + Sync {
    async fn correlation(&self) -> Result<f64, ProviderError>;
}

/// Higher-timeframe trend alignment. Neutral default: score 0, confidence 0.
#[async_trait]
pub trait HtfTrendProvider: Send + Sync {
    async fn alignment(&self) -> Result<HtfAlignment, ProviderError>;
}

/// Always-neutral provider, used when the host wires nothing in.
pub struct NeutralProvider;

#[async_trait]
impl SentimentProvider for NeutralProvider {
    async fn sentiment(&self) -> Result<f64, ProviderError> {
        Ok(50.0)
    }
}

#[async_trait]
impl CorrelationProvider for NeutralProvider {
    async fn correlation(&self) -> Result<f64, ProviderError> {
        Ok(0.0)
    }
}

#[async_trait]
impl HtfTrendProvider for NeutralProvider {
    async fn alignment(&self) -> Result<HtfAlignment, ProviderError> {
        Ok(HtfAlignment::neutral())
    }
}

/// Await a provider call with a timeout, substituting `fallback` on failure.
pub async fn with_fallback<T, F>(name: &str, timeout: Duration, fallback: T, call: F) -> T
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            warn!(provider = name, error = %e, "provider failed, using neutral default");
            fallback
        }
        Err(_) => {
            warn!(provider = name, timeout_ms = timeout.as_millis() as u64,
                "provider timed out, using neutral default");
            fallback
        }
    }
}
