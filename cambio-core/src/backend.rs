use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::WILDCARD;
use crate::error::CambioError;
use crate::market::{PersonalData, SymbolData};
use crate::timeframe::Timeframe;

/// What a venue reports as supported once its client is connected.
///
/// Loaded once at coordinator startup and treated as immutable for the
/// coordinator's lifetime; a venue changing its supported set mid-session
/// is not modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueSnapshot {
    /// Every symbol the venue trades.
    pub symbols: Vec<String>,
    /// Supported intervals keyed by symbol. The [`WILDCARD`] key means the
    /// set applies to all symbols uniformly; per-symbol keys exist only for
    /// venues (or replay datasets) with differing intervals per symbol.
    pub timeframes: HashMap<String, Vec<Timeframe>>,
}

impl VenueSnapshot {
    /// Build a snapshot whose timeframes apply to all symbols uniformly.
    #[must_use]
    pub fn uniform(symbols: Vec<String>, timeframes: Vec<Timeframe>) -> Self {
        let mut map = HashMap::new();
        map.insert(WILDCARD.to_string(), timeframes);
        Self {
            symbols,
            timeframes: map,
        }
    }

    /// Whether the venue trades the given pair.
    #[must_use]
    pub fn supports_symbol(&self, pair: &str) -> bool {
        self.symbols.iter().any(|s| s == pair)
    }

    /// Whether the venue supports the interval, for the given symbol when
    /// the snapshot is per-symbol. The wildcard entry wins when present.
    #[must_use]
    pub fn supports_timeframe(&self, tf: Timeframe, symbol: Option<&str>) -> bool {
        if let Some(all) = self.timeframes.get(WILDCARD) {
            return all.contains(&tf);
        }
        symbol
            .and_then(|s| self.timeframes.get(s))
            .is_some_and(|tfs| tfs.contains(&tf))
    }

    /// The uniform interval set, empty when the snapshot is per-symbol only.
    #[must_use]
    pub fn wildcard_timeframes(&self) -> &[Timeframe] {
        self.timeframes.get(WILDCARD).map_or(&[], Vec::as_slice)
    }
}

/// Synchronous (request/response) access to a venue.
///
/// Implemented by live REST clients and by the offline simulator, so the
/// coordinator's query surface is uniform regardless of mode. Held as
/// `Arc<dyn VenueBackend>`.
#[async_trait]
pub trait VenueBackend: Send + Sync {
    /// Identity of the venue this backend talks to, e.g. "binance".
    fn venue(&self) -> &str;

    /// Capability snapshot as reported by the connected client.
    ///
    /// `None` means the underlying client is unavailable; the coordinator
    /// treats that as a fatal initialization error.
    fn snapshot(&self) -> Option<VenueSnapshot>;

    /// Venue-reported rate limit in milliseconds between requests.
    fn rate_limit_ms(&self) -> u64;

    /// Convert a raw venue timestamp to canonical epoch seconds.
    fn uniform_timestamp(&self, raw: f64) -> f64;

    /// Fetch candles and ticker for a pair.
    async fn symbol_data(&self, pair: &str) -> Result<SymbolData, CambioError>;

    /// Fetch balances and open orders for the authenticated account.
    async fn personal_data(&self) -> Result<PersonalData, CambioError>;
}
