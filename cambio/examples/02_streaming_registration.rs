//! Shows how a streaming implementation is matched to a venue: register a
//! factory under its identity, satisfy the configuration checks, and the
//! coordinator initializes and starts the channel on its own.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cambio::{
    BotConfig, CambioError, ExchangeCoordinator, InstrumentGroup, StreamFactory, StreamHandle,
    StreamRegistry, Timeframe, TraderConfig, VenueBackend, VenueConfig, VenueSnapshot,
    VenueStream,
};

const VENUE: &str = "demoex";

// A stand-in for a live REST client: static capability snapshot, no data.
struct DemoBackend;

#[async_trait]
impl VenueBackend for DemoBackend {
    fn venue(&self) -> &str {
        VENUE
    }
    fn snapshot(&self) -> Option<VenueSnapshot> {
        Some(VenueSnapshot::uniform(
            vec!["BTC/USDT".to_string(), "ETH/USDT".to_string()],
            vec![Timeframe::I1m, Timeframe::I1h, Timeframe::D1],
        ))
    }
    fn rate_limit_ms(&self) -> u64 {
        500
    }
    fn uniform_timestamp(&self, raw: f64) -> f64 {
        raw / 1000.0
    }
    async fn symbol_data(&self, pair: &str) -> Result<cambio::SymbolData, CambioError> {
        Err(CambioError::not_found(format!("symbol data for {pair}")))
    }
    async fn personal_data(&self) -> Result<cambio::PersonalData, CambioError> {
        Ok(cambio::PersonalData::default())
    }
}

// A channel that just logs what it subscribes to and idles until stopped.
struct DemoStream {
    subscriptions: Vec<String>,
}

#[async_trait]
impl VenueStream for DemoStream {
    fn venue(&self) -> &'static str {
        VENUE
    }

    fn init(&mut self, timeframes: &[Timeframe], pairs: &[String]) -> Result<(), CambioError> {
        println!("stream init: timeframes={timeframes:?} pairs={pairs:?}");
        self.subscriptions = pairs.to_vec();
        Ok(())
    }

    async fn start(&mut self) -> Result<StreamHandle, CambioError> {
        println!("stream started for {} pairs", self.subscriptions.len());
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = stop_rx.await;
            println!("stream stopped");
        });
        Ok(StreamHandle::new(task, stop_tx))
    }
}

struct DemoStreamFactory;

impl StreamFactory for DemoStreamFactory {
    fn venue(&self) -> &'static str {
        VENUE
    }
    fn create(&self, _config: &BotConfig) -> Box<dyn VenueStream> {
        Box::new(DemoStream {
            subscriptions: vec![],
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut venues = HashMap::new();
    venues.insert(
        VENUE.to_string(),
        VenueConfig {
            key: Some("demo-key".to_string()),
            secret: Some("demo-secret".to_string()),
            streaming_enabled: true,
        },
    );
    let mut instruments = HashMap::new();
    instruments.insert(
        "Bitcoin".to_string(),
        InstrumentGroup {
            pairs: vec!["BTC/USDT".to_string()],
        },
    );
    let config = Arc::new(BotConfig {
        trader: TraderConfig {
            user_stream_enabled: true,
        },
        venues,
        instruments,
        timeframes: vec![Timeframe::I1h],
    });

    let mut registry = StreamRegistry::new();
    registry.register(Arc::new(DemoStreamFactory))?;

    let coordinator = ExchangeCoordinator::builder(config, VENUE)
        .backend(Arc::new(DemoBackend))
        .stream_registry(registry)
        .build()
        .await?;

    println!(
        "streaming available: {} (resolved {:?} / {:?})",
        coordinator.streaming_available(),
        coordinator.timeframes(),
        coordinator.traded_pairs()
    );

    coordinator.shutdown().await;
    Ok(())
}
