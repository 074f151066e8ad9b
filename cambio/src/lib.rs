//! Cambio coordinates the connection to a single exchange venue.
//!
//! Overview
//! - Selects between a live request/response backend and an offline
//!   simulator, both behind the `cambio_core::VenueBackend` contract.
//! - Loads the venue's capability snapshot once and resolves the usable
//!   timeframes and trading pairs from it plus configuration.
//! - Matches a streaming implementation to the venue by identity through an
//!   explicit registration table, starts it at most once, and only when the
//!   configuration's credential and streaming checks pass.
//! - Hands downstream subsystems a uniform façade that works identically
//!   for live and simulated sessions.
//!
//! Key behaviors and trade-offs
//! - Construction is all-or-nothing: either every initialization step
//!   completes and the coordinator reports ready, or `build()` returns an
//!   error and nothing partially-initialized escapes.
//! - Only a missing capability snapshot is fatal. A venue absent from the
//!   credentials section degrades to `enabled() == false` with a warning;
//!   a venue with no registered streaming implementation simply runs
//!   without a channel.
//! - Resolved sets are computed once and immutable afterwards; every
//!   consumer observes the same view.
//!
//! Building a live coordinator:
//! ```rust,ignore
//! use std::sync::Arc;
//! use cambio::ExchangeCoordinator;
//! use cambio_core::StreamRegistry;
//!
//! let mut registry = StreamRegistry::new();
//! registry.register(Arc::new(BinanceStreamFactory))?;
//!
//! let coordinator = ExchangeCoordinator::builder(config.clone(), "binance")
//!     .backend(Arc::new(BinanceBackend::connect(&config)?))
//!     .stream_registry(registry)
//!     .build()
//!     .await?;
//!
//! assert!(coordinator.is_ready());
//! let data = coordinator.symbol_data("BTC/USDT").await?;
//! ```
//!
//! Running against the simulator instead:
//! ```rust,ignore
//! use cambio_sim::SimulatedBackend;
//!
//! let coordinator = ExchangeCoordinator::builder(config.clone(), "binance")
//!     .backend(Arc::new(SimulatedBackend::new(&config, "binance")))
//!     .simulated(true)
//!     .build()
//!     .await?;
//! ```
//!
//! See `cambio/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod coordinator;
mod dispatcher;

pub use coordinator::{CoordinatorBuilder, ExchangeCoordinator};
pub use dispatcher::ExchangeDispatcher;

// Re-export core types for convenience
pub use cambio_core::{
    // Foundational types
    Balance,
    BotConfig,
    CambioError,
    Candle,
    InstrumentGroup,
    MIN_EVAL_TIMEFRAME,
    Order,
    OrderStatus,
    PersonalData,
    Side,
    StreamFactory,
    StreamHandle,
    StreamRegistry,
    SymbolData,
    Ticker,
    Timeframe,
    TraderConfig,
    VenueBackend,
    VenueConfig,
    VenueSnapshot,
    VenueStream,
};
