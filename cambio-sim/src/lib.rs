//! Offline venue backend for cambio. Serves deterministic fixture data so
//! sessions, tests, and examples run without network access.

use async_trait::async_trait;
use cambio_core::{
    BotConfig, CambioError, PersonalData, SymbolData, Timeframe, VenueBackend, VenueSnapshot,
};

mod fixtures;

/// Simulated venue: same contract as a live backend, fixture data inside.
///
/// Trades exactly the pairs the configuration mentions and supports the
/// configured timeframes (or a standard ladder when none are configured),
/// so a simulated session mirrors what the user asked for. Fixture candles
/// carry raw millisecond timestamps, like the wire payloads of a typical
/// live venue, and `uniform_timestamp` performs the matching
/// millisecond-to-second conversion.
pub struct SimulatedBackend {
    venue: String,
    snapshot: VenueSnapshot,
}

impl SimulatedBackend {
    /// Build a simulator for the given venue identity.
    #[must_use]
    pub fn new(config: &BotConfig, venue: impl Into<String>) -> Self {
        let mut symbols: Vec<String> = config
            .instruments
            .values()
            .flat_map(|group| group.pairs.iter().cloned())
            .collect();
        symbols.sort();
        symbols.dedup();

        let timeframes = if config.timeframes.is_empty() {
            vec![
                Timeframe::I1m,
                Timeframe::I1h,
                Timeframe::I4h,
                Timeframe::D1,
            ]
        } else {
            config.timeframes.clone()
        };

        Self {
            venue: venue.into(),
            snapshot: VenueSnapshot::uniform(symbols, timeframes),
        }
    }
}

#[async_trait]
impl VenueBackend for SimulatedBackend {
    fn venue(&self) -> &str {
        &self.venue
    }

    fn snapshot(&self) -> Option<VenueSnapshot> {
        Some(self.snapshot.clone())
    }

    fn rate_limit_ms(&self) -> u64 {
        // No wire to saturate; keep a nominal spacing so schedulers built
        // against live venues behave the same here.
        50
    }

    fn uniform_timestamp(&self, raw: f64) -> f64 {
        raw / 1000.0
    }

    async fn symbol_data(&self, pair: &str) -> Result<SymbolData, CambioError> {
        if !self.snapshot.supports_symbol(pair) {
            return Err(CambioError::not_found(format!("symbol data for {pair}")));
        }
        Ok(fixtures::symbol_data(pair))
    }

    async fn personal_data(&self) -> Result<PersonalData, CambioError> {
        Ok(fixtures::personal_data())
    }
}
