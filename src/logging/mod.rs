//! Tracing setup for the scoring engine.
//!
//! Production gets structured JSON on stdout for log shipping; anything else
//! gets compact ANSI output aimed at a terminal. `RUST_LOG` overrides the
//! default filter.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "info,aurix=debug";

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    match get_environment().as_str() {
        "production" | "prod" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_current_span(false)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_target(true).with_ansi(true))
                .init();
        }
    }
}
