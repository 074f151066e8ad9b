use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use cambio_core::{
    BotConfig, CambioError, Candle, MIN_EVAL_TIMEFRAME, PersonalData, StreamHandle,
    StreamRegistry, SymbolData, Timeframe, VenueBackend, VenueSnapshot, VenueStream,
    needs_uniformization, resolve_pairs, resolve_timeframes, uniformize_candles,
};

use crate::dispatcher::ExchangeDispatcher;

/// Initialization progress, in the only order the steps are allowed to run:
/// resolution needs a loaded snapshot, a streaming start needs resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitStage {
    Uninitialized,
    BackendReady,
    Resolved,
    StreamingEvaluated,
    Ready,
}

struct StartedStream {
    // Kept alive for the coordinator's lifetime; dropping it would tear
    // down the implementation's subscriptions.
    _channel: Box<dyn VenueStream>,
    handle: StreamHandle,
}

/// Owns the lifecycle of one venue connection.
///
/// Construction runs the whole initialization sequence (backend check,
/// capability snapshot, resolution, optional streaming start, façade) and
/// either fully succeeds or fails; there is no partially-ready state. All
/// queries below are reads of data resolved during construction.
pub struct ExchangeCoordinator {
    config: Arc<BotConfig>,
    venue: String,
    simulated: bool,
    backend: Arc<dyn VenueBackend>,
    snapshot: Option<VenueSnapshot>,
    timeframes: Vec<Timeframe>,
    traded_pairs: Vec<String>,
    stream: Option<StartedStream>,
    dispatcher: Arc<ExchangeDispatcher>,
    ready: bool,
}

impl fmt::Debug for ExchangeCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeCoordinator")
            .field("venue", &self.venue)
            .field("simulated", &self.simulated)
            .field("snapshot", &self.snapshot)
            .field("timeframes", &self.timeframes)
            .field("traded_pairs", &self.traded_pairs)
            .field("streaming", &self.stream.is_some())
            .field("ready", &self.ready)
            .finish()
    }
}

/// Builder for constructing an `ExchangeCoordinator`.
pub struct CoordinatorBuilder {
    config: Arc<BotConfig>,
    venue: String,
    backend: Option<Arc<dyn VenueBackend>>,
    registry: StreamRegistry,
    simulated: bool,
}

impl CoordinatorBuilder {
    /// Create a builder for the given configuration and venue identity.
    #[must_use]
    pub fn new(config: Arc<BotConfig>, venue: impl Into<String>) -> Self {
        Self {
            config,
            venue: venue.into(),
            backend: None,
            registry: StreamRegistry::new(),
            simulated: false,
        }
    }

    /// Attach the backend this coordinator drives: a live client, or the
    /// simulator together with [`simulated`](Self::simulated).
    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn VenueBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Run in simulated mode: skip capability loading and resolution
    /// against a live venue, and never start a streaming channel. The
    /// simulator presents its own symbol and timeframe sets through the
    /// façade.
    #[must_use]
    pub const fn simulated(mut self, yes: bool) -> Self {
        self.simulated = yes;
        self
    }

    /// Provide the table of streaming implementations to match against.
    /// Without one, every venue simply runs without a channel.
    #[must_use]
    pub fn stream_registry(mut self, registry: StreamRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run the initialization sequence and build the coordinator.
    ///
    /// # Errors
    /// - `InvalidArg` when no backend was attached, or when the attached
    ///   backend reports a different venue identity than the builder's.
    /// - `Init` when a live backend exposes no capability snapshot. Not
    ///   retried; the caller decides whether to abort or fall back to
    ///   simulated mode.
    /// - Whatever a matched streaming channel returns from `init`/`start`.
    pub async fn build(self) -> Result<ExchangeCoordinator, CambioError> {
        let Self {
            config,
            venue,
            backend,
            registry,
            simulated,
        } = self;

        let mut stage = InitStage::Uninitialized;
        tracing::debug!(venue = %venue, stage = ?stage, "initializing coordinator");

        let backend = backend
            .ok_or_else(|| CambioError::invalid_arg("no backend attached; set one via backend(...)"))?;
        if backend.venue() != venue {
            return Err(CambioError::invalid_arg(format!(
                "backend reports venue {}, coordinator was built for {venue}",
                backend.venue()
            )));
        }
        stage = InitStage::BackendReady;
        tracing::debug!(venue = %venue, stage = ?stage, "backend attached");

        let mut snapshot = None;
        let mut timeframes = Vec::new();
        let mut traded_pairs = Vec::new();
        if !simulated {
            let Some(snap) = backend.snapshot() else {
                tracing::error!(venue = %venue, "venue client unavailable; no capability snapshot");
                return Err(CambioError::init(venue));
            };
            timeframes = resolve_timeframes(
                &config.timeframes,
                snap.wildcard_timeframes(),
                MIN_EVAL_TIMEFRAME,
            );
            traded_pairs = resolve_pairs(&config.instruments, &snap.symbols);
            snapshot = Some(snap);
        }
        stage = InitStage::Resolved;
        tracing::debug!(
            venue = %venue,
            stage = ?stage,
            timeframes = timeframes.len(),
            pairs = traded_pairs.len(),
            "resolution complete"
        );

        let mut stream = None;
        if !simulated && config.streaming_allowed(&venue) {
            if let Some(factory) = registry.lookup(&venue) {
                let mut channel = factory.create(&config);
                channel.init(&timeframes, &traded_pairs)?;
                let handle = channel.start().await?;
                tracing::info!(venue = %venue, "streaming channel started");
                stream = Some(StartedStream {
                    _channel: channel,
                    handle,
                });
            } else {
                tracing::debug!(venue = %venue, "no streaming implementation registered");
            }
        }
        stage = InitStage::StreamingEvaluated;
        tracing::debug!(venue = %venue, stage = ?stage, streaming = stream.is_some(), "streaming evaluated");

        let dispatcher = Arc::new(ExchangeDispatcher::new(backend.clone(), stream.is_some()));
        stage = InitStage::Ready;
        tracing::debug!(venue = %venue, stage = ?stage, simulated, "coordinator ready");

        Ok(ExchangeCoordinator {
            config,
            venue,
            simulated,
            backend,
            snapshot,
            timeframes,
            traded_pairs,
            stream,
            dispatcher,
            ready: true,
        })
    }
}

impl ExchangeCoordinator {
    /// Start building a coordinator for the given configuration and venue.
    #[must_use]
    pub fn builder(config: Arc<BotConfig>, venue: impl Into<String>) -> CoordinatorBuilder {
        CoordinatorBuilder::new(config, venue)
    }

    /// Identity of the venue this coordinator connects to.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Whether the full initialization sequence completed. Flips to `true`
    /// exactly once and is never reset.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether this session runs against the offline simulator.
    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// Whether a streaming channel was matched, initialized, and started.
    #[must_use]
    pub const fn streaming_available(&self) -> bool {
        self.stream.is_some()
    }

    /// Whether the session wants continuous personal-data updates.
    #[must_use]
    pub fn needs_user_stream(&self) -> bool {
        self.config.trader.user_stream_enabled
    }

    /// Whether the venue is usable at all: always in simulated mode,
    /// otherwise only when it appears in the venues configuration section.
    /// Logs a warning instead of raising when it does not.
    #[must_use]
    pub fn enabled(&self) -> bool {
        if self.simulated || self.config.knows_venue(&self.venue) {
            true
        } else {
            tracing::warn!(venue = %self.venue, "venue is currently disabled: not present in the venues configuration");
            false
        }
    }

    /// The underlying backend. For narrow, venue-specific needs only; it
    /// bypasses the façade, so ordinary data access should go through
    /// [`dispatcher`](Self::dispatcher) instead.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn VenueBackend> {
        &self.backend
    }

    /// The façade downstream subsystems should hold.
    #[must_use]
    pub fn dispatcher(&self) -> &Arc<ExchangeDispatcher> {
        &self.dispatcher
    }

    /// Resolved candle intervals, in configured order with the synthesized
    /// evaluation interval appended.
    #[must_use]
    pub fn timeframes(&self) -> &[Timeframe] {
        &self.timeframes
    }

    /// Resolved trading pairs. Empty in simulated mode, where the simulator
    /// presents its own set through the façade.
    #[must_use]
    pub fn traded_pairs(&self) -> &[String] {
        &self.traded_pairs
    }

    /// Raw symbol set the venue reported. Empty in simulated mode.
    #[must_use]
    pub fn venue_symbols(&self) -> &[String] {
        self.snapshot.as_ref().map_or(&[], |s| s.symbols.as_slice())
    }

    /// Raw uniform interval set the venue reported. Empty in simulated mode.
    #[must_use]
    pub fn venue_timeframes(&self) -> &[Timeframe] {
        self.snapshot
            .as_ref()
            .map_or(&[], VenueSnapshot::wildcard_timeframes)
    }

    /// The full capability snapshot, when one was loaded.
    #[must_use]
    pub const fn venue_snapshot(&self) -> Option<&VenueSnapshot> {
        self.snapshot.as_ref()
    }

    /// Minimum spacing between requests, from the venue's millisecond rate
    /// limit.
    #[must_use]
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.backend.rate_limit_ms())
    }

    /// Candles and ticker for a pair, through the façade.
    ///
    /// # Errors
    /// Propagates the backend's failure.
    pub async fn symbol_data(&self, pair: &str) -> Result<SymbolData, CambioError> {
        self.dispatcher.symbol_data(pair).await
    }

    /// Balances and open orders, through the façade.
    ///
    /// # Errors
    /// Propagates the backend's failure.
    pub async fn personal_data(&self) -> Result<PersonalData, CambioError> {
        self.dispatcher.personal_data().await
    }

    /// Rewrite a whole batch to canonical epoch seconds when the leading
    /// candle's timestamp is implausible.
    ///
    /// The first record decides for the batch: batches are assumed
    /// homogeneous, so the remaining records are rewritten without being
    /// re-checked individually. A malformed leading record therefore
    /// suppresses or forces correction for the whole batch.
    pub fn uniformize_candles_if_necessary(&self, candles: &mut [Candle]) {
        if candles.first().is_some_and(|c| needs_uniformization(c.ts)) {
            uniformize_candles(candles, |ts| self.dispatcher.uniform_timestamp(ts));
        }
    }

    /// Single-candle variant of
    /// [`uniformize_candles_if_necessary`](Self::uniformize_candles_if_necessary).
    pub fn uniformize_candle_if_necessary(&self, candle: &mut Candle) {
        if needs_uniformization(candle.ts) {
            candle.ts = self.dispatcher.uniform_timestamp(candle.ts);
        }
    }

    /// Tear the session down, stopping the streaming channel gracefully
    /// when one was started.
    pub async fn shutdown(self) {
        if let Some(stream) = self.stream {
            stream.handle.stop().await;
        }
    }
}
