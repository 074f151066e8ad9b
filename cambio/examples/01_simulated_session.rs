use std::collections::HashMap;
use std::sync::Arc;

use cambio::{BotConfig, ExchangeCoordinator, InstrumentGroup, Timeframe};
use cambio_sim::SimulatedBackend;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Describe the session: one asset, two pairs, two intervals.
    let mut instruments = HashMap::new();
    instruments.insert(
        "Bitcoin".to_string(),
        InstrumentGroup {
            pairs: vec!["BTC/USDT".to_string(), "BTC/EUR".to_string()],
        },
    );
    let config = Arc::new(BotConfig {
        instruments,
        timeframes: vec![Timeframe::I1h, Timeframe::D1],
        ..BotConfig::default()
    });

    // 2. Build a simulated coordinator; no credentials, no network.
    let coordinator = ExchangeCoordinator::builder(config.clone(), "sim")
        .backend(Arc::new(SimulatedBackend::new(&config, "sim")))
        .simulated(true)
        .build()
        .await?;

    println!(
        "session ready: venue={} simulated={} streaming={}",
        coordinator.venue(),
        coordinator.is_simulated(),
        coordinator.streaming_available()
    );

    // 3. Read fixture data through the façade, normalizing timestamps the
    //    same way a live session would.
    let mut data = coordinator.symbol_data("BTC/USDT").await?;
    coordinator.uniformize_candles_if_necessary(&mut data.candles);

    let last = data.candles.last().expect("fixture series is never empty");
    println!(
        "BTC/USDT: {} candles, last close {} at t={}",
        data.candles.len(),
        last.close,
        last.ts
    );

    let personal = coordinator.personal_data().await?;
    for balance in &personal.balances {
        println!("balance: {} free={} locked={}", balance.asset, balance.free, balance.locked);
    }

    Ok(())
}
