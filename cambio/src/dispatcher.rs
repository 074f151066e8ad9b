use std::sync::Arc;

use cambio_core::{CambioError, PersonalData, SymbolData, VenueBackend};

/// Unified surface other subsystems hold to reach exchange data without
/// knowing whether the session is live or simulated.
///
/// Delegates to the backend the coordinator selected; the streaming channel,
/// when present, feeds the same containers asynchronously on the
/// implementation side, so callers read one consistent view either way.
pub struct ExchangeDispatcher {
    backend: Arc<dyn VenueBackend>,
    streaming: bool,
}

impl ExchangeDispatcher {
    pub(crate) fn new(backend: Arc<dyn VenueBackend>, streaming: bool) -> Self {
        Self { backend, streaming }
    }

    /// Identity of the venue behind this dispatcher.
    #[must_use]
    pub fn venue(&self) -> &str {
        self.backend.venue()
    }

    /// Whether a streaming channel is feeding this dispatcher.
    #[must_use]
    pub const fn streaming_available(&self) -> bool {
        self.streaming
    }

    /// Convert a raw venue timestamp to canonical epoch seconds.
    #[must_use]
    pub fn uniform_timestamp(&self, raw: f64) -> f64 {
        self.backend.uniform_timestamp(raw)
    }

    /// Candles and ticker for a pair.
    ///
    /// # Errors
    /// Propagates the backend's failure, e.g. `NotFound` for an unknown pair.
    pub async fn symbol_data(&self, pair: &str) -> Result<SymbolData, CambioError> {
        self.backend.symbol_data(pair).await
    }

    /// Balances and open orders for the authenticated account.
    ///
    /// # Errors
    /// Propagates the backend's failure.
    pub async fn personal_data(&self) -> Result<PersonalData, CambioError> {
        self.backend.personal_data().await
    }
}
