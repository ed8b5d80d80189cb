use aurix::lifecycle;
use aurix::models::price::{Candle, PriceSeries};
use aurix::ScoringPolicy;
use aurix::SignalEngine;
use chrono::{Duration, Utc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    aurix::logging::init_logging();

    let series = synthetic_uptrend(120, 2600.0);
    let engine = SignalEngine::new(ScoringPolicy::default());

    let report = engine.generate_signal(&series, "demo-user").await?;

    // Full report as consumers would receive it over the wire.
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\nTotal score: {:.1}/100", report.analysis.total_score);
    println!("Regime: {:?}", report.analysis.regime);
    println!("Factors:");
    for (name, value) in report.analysis.factors.entries() {
        println!("  {:<12} {:+.2}", name, value);
    }
    println!(
        "Advisory: {:?} ({:.0}%) - {}",
        report.analysis.advisory.action,
        report.analysis.advisory.confidence,
        report.analysis.advisory.reason
    );

    match report.signal {
        Some(mut signal) => {
            println!("\nSignal: {:?} ({:?})", signal.action, signal.strength);
            println!("  Entry: {:.2}", signal.entry_price);
            println!("  TP1:   {:.2}", signal.take_profit1);
            println!("  TP2:   {:.2}", signal.take_profit2);
            println!("  SL:    {:.2}", signal.stop_loss);
            println!("  {}", signal.reason);

            // Walk the signal through a few ticks to show the lifecycle.
            for price in [signal.take_profit1 + 0.5, signal.entry_price] {
                signal = lifecycle::update(signal, price);
                println!(
                    "  tick {:.2} -> {:?} (outcome: {:?}, stop now {:.2})",
                    price, signal.position, signal.outcome, signal.stop_loss
                );
            }
        }
        None => {
            println!(
                "\nHOLD: {}",
                report
                    .analysis
                    .hold_reason
                    .unwrap_or_else(|| "no reason recorded".to_string())
            );
        }
    }

    println!(
        "\nRisk dashboard: pnl {:.2}%, trades {}, level {:?}, can_trade {}",
        report.analysis.risk.daily_pnl,
        report.analysis.risk.trades_today,
        report.analysis.risk.risk_level,
        report.analysis.risk.can_trade
    );

    Ok(())
}

fn synthetic_uptrend(count: usize, base: f64) -> PriceSeries {
    let start = Utc::now() - Duration::minutes(count as i64);
    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        let price = base + i as f64 * 0.8;
        candles.push(
            Candle::new(
                start + Duration::minutes(i as i64),
                price,
                price + 0.6,
                price - 0.4,
                price + 0.3,
            )
            .with_volume(1_000.0 + i as f64 * 12.0),
        );
    }
    let current = candles.last().map(|c| c.close).unwrap_or(base);
    PriceSeries::new(candles, current)
}
