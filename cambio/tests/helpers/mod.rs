#![allow(dead_code)]

pub mod mock_backend;
pub mod mock_stream;

use std::collections::HashMap;
use std::sync::Arc;

use cambio::{BotConfig, InstrumentGroup, Timeframe, TraderConfig, VenueConfig};

pub use mock_backend::MockBackend;
pub use mock_stream::{RecordingFactory, SharedEvents};

pub const VENUE: &str = "binance";

/// Configuration with credentials and streaming enabled for [`VENUE`].
pub fn streaming_config() -> Arc<BotConfig> {
    Arc::new(base_config(true, true))
}

/// Configuration with credentials but the streaming flag off.
pub fn rest_only_config() -> Arc<BotConfig> {
    Arc::new(base_config(true, false))
}

/// Configuration where the venue has the flag but no credentials.
pub fn credentialless_config() -> Arc<BotConfig> {
    Arc::new(base_config(false, true))
}

/// Configuration that does not mention [`VENUE`] at all.
pub fn unknown_venue_config() -> Arc<BotConfig> {
    let mut cfg = base_config(true, true);
    cfg.venues.clear();
    Arc::new(cfg)
}

fn base_config(with_credentials: bool, streaming_enabled: bool) -> BotConfig {
    let mut venues = HashMap::new();
    venues.insert(
        VENUE.to_string(),
        VenueConfig {
            key: with_credentials.then(|| "key".to_string()),
            secret: with_credentials.then(|| "secret".to_string()),
            streaming_enabled,
        },
    );

    let mut instruments = HashMap::new();
    instruments.insert(
        "Bitcoin".to_string(),
        InstrumentGroup {
            pairs: vec!["BTC/USDT".to_string(), "BTC/EUR".to_string()],
        },
    );
    instruments.insert(
        "Ethereum".to_string(),
        InstrumentGroup {
            pairs: vec!["ETH/USDT".to_string()],
        },
    );

    BotConfig {
        trader: TraderConfig {
            user_stream_enabled: true,
        },
        venues,
        instruments,
        timeframes: vec![Timeframe::I1h, Timeframe::I15m, Timeframe::D1],
    }
}
