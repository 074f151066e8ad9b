//! Configuration shape consumed by the coordinator.
//!
//! Loading and validating configuration files is the caller's job; this
//! module only defines the read-only structure and the predicate helpers
//! the coordinator consults. Credential values are never inspected beyond
//! presence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::timeframe::Timeframe;

/// Marker meaning "applies to all symbols uniformly" in per-symbol maps.
pub const WILDCARD: &str = "*";

/// Top-level configuration consumed by the coordinator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Trader/session section.
    #[serde(default)]
    pub trader: TraderConfig,
    /// Per-venue credential and streaming settings, keyed by venue identity.
    #[serde(default)]
    pub venues: HashMap<String, VenueConfig>,
    /// Traded instruments grouped by asset.
    #[serde(default)]
    pub instruments: HashMap<String, InstrumentGroup>,
    /// Globally configured candle intervals, in user order.
    #[serde(default)]
    pub timeframes: Vec<Timeframe>,
}

/// Trader/session settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Whether the session wants continuous personal-data updates.
    #[serde(default)]
    pub user_stream_enabled: bool,
}

/// Per-venue settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueConfig {
    /// API key. Presence only is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// API secret. Presence only is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Whether a push-based streaming channel may be started for this venue.
    #[serde(default)]
    pub streaming_enabled: bool,
}

/// Trading pairs configured for one asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstrumentGroup {
    /// Pairs in user order, e.g. `["BTC/USDT", "BTC/EUR"]`.
    #[serde(default)]
    pub pairs: Vec<String>,
}

impl BotConfig {
    /// Whether the venue appears in the credentials section at all.
    #[must_use]
    pub fn knows_venue(&self, venue: &str) -> bool {
        self.venues.contains_key(venue)
    }

    /// Whether both key and secret are present for the venue.
    #[must_use]
    pub fn has_credentials(&self, venue: &str) -> bool {
        self.venues
            .get(venue)
            .is_some_and(|v| v.key.is_some() && v.secret.is_some())
    }

    /// Whether a streaming channel may be started for the venue:
    /// credentials present and the per-venue flag set.
    ///
    /// This is the only check consulted before starting a channel; a
    /// registered implementation alone is never enough.
    #[must_use]
    pub fn streaming_allowed(&self, venue: &str) -> bool {
        self.has_credentials(venue)
            && self
                .venues
                .get(venue)
                .is_some_and(|v| v.streaming_enabled)
    }
}
