#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use cambio::{
    CambioError, PersonalData, SymbolData, Timeframe, VenueBackend, VenueSnapshot,
};

/// Configurable in-memory backend used by integration tests.
pub struct MockBackend {
    pub venue: &'static str,
    /// `None` models an unavailable client.
    pub snapshot: Option<VenueSnapshot>,
    pub rate_limit_ms: u64,
    /// `uniform_timestamp` divides raw values by this; 1000 models a
    /// milliseconds venue.
    pub ts_divisor: f64,
    pub symbol_data_fn:
        Option<Arc<dyn Fn(&str) -> Result<SymbolData, CambioError> + Send + Sync>>,
    pub personal_data_fn:
        Option<Arc<dyn Fn() -> Result<PersonalData, CambioError> + Send + Sync>>,
}

impl MockBackend {
    /// Backend reporting the default snapshot used across these tests.
    pub fn live(venue: &'static str) -> Arc<Self> {
        Arc::new(Self {
            venue,
            snapshot: Some(default_snapshot()),
            ..Self::bare(venue)
        })
    }

    /// Backend whose client is unavailable: no snapshot to load.
    pub fn without_client(venue: &'static str) -> Arc<Self> {
        Arc::new(Self::bare(venue))
    }

    pub fn bare(venue: &'static str) -> Self {
        Self {
            venue,
            snapshot: None,
            rate_limit_ms: 1200,
            ts_divisor: 1000.0,
            symbol_data_fn: None,
            personal_data_fn: None,
        }
    }
}

/// Snapshot most tests resolve against: four symbols, sub-hour to daily
/// intervals, uniform across symbols.
pub fn default_snapshot() -> VenueSnapshot {
    VenueSnapshot::uniform(
        vec![
            "BTC/USDT".to_string(),
            "ETH/USDT".to_string(),
            "XRP/USDT".to_string(),
            "BTC/EUR".to_string(),
        ],
        vec![
            Timeframe::I1m,
            Timeframe::I15m,
            Timeframe::I1h,
            Timeframe::D1,
        ],
    )
}

#[async_trait]
impl VenueBackend for MockBackend {
    fn venue(&self) -> &str {
        self.venue
    }

    fn snapshot(&self) -> Option<VenueSnapshot> {
        self.snapshot.clone()
    }

    fn rate_limit_ms(&self) -> u64 {
        self.rate_limit_ms
    }

    fn uniform_timestamp(&self, raw: f64) -> f64 {
        raw / self.ts_divisor
    }

    async fn symbol_data(&self, pair: &str) -> Result<SymbolData, CambioError> {
        if let Some(f) = &self.symbol_data_fn {
            return (f)(pair);
        }
        Err(CambioError::unsupported("symbol-data"))
    }

    async fn personal_data(&self) -> Result<PersonalData, CambioError> {
        if let Some(f) = &self.personal_data_fn {
            return (f)();
        }
        Err(CambioError::unsupported("personal-data"))
    }
}
