//! cambio-core
//!
//! Core types, contracts, and utilities shared across the cambio ecosystem.
//!
//! - `config`: the read-only configuration shape and its predicate helpers.
//! - `backend`: the `VenueBackend` trait and the venue capability snapshot.
//! - `stream`: the `VenueStream` contract, stream handles, and the
//!   registration table that matches streaming implementations to venues.
//! - `resolve`: pure functions that intersect configuration with what a
//!   venue actually supports.
//! - `normalize`: timestamp plausibility checks and batch rewriting.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. The public
//! API is explicitly coupled to Tokio types in two places:
//!
//! - `stream::StreamHandle` wraps `tokio::task::JoinHandle<()>` and uses
//!   `tokio::sync::oneshot::Sender<()>` for cooperative shutdown.
//! - `backend::VenueBackend` data operations are `async fn`s via
//!   `async-trait`.
//!
//! As a result, code that starts streaming channels or calls backend data
//! operations must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// The `VenueBackend` trait and the capability snapshot it reports.
pub mod backend;
/// Read-only configuration types and credential/streaming predicates.
pub mod config;
mod error;
/// Market-data and account containers served through the façade.
pub mod market;
/// Timestamp plausibility checks and in-place batch correction.
pub mod normalize;
/// Pure resolution of usable timeframes and trading pairs.
pub mod resolve;
/// Streaming channel contract, handles, and the venue registration table.
pub mod stream;
mod timeframe;

pub use backend::{VenueBackend, VenueSnapshot};
pub use config::{BotConfig, InstrumentGroup, TraderConfig, VenueConfig, WILDCARD};
pub use error::CambioError;
pub use market::{Balance, Candle, Order, OrderStatus, PersonalData, Side, SymbolData, Ticker};
pub use normalize::{is_plausible_timestamp, needs_uniformization, uniformize_candles};
pub use resolve::{find_min_timeframe, resolve_pairs, resolve_timeframes};
pub use stream::{StreamFactory, StreamHandle, StreamRegistry, VenueStream};
pub use timeframe::{MIN_EVAL_TIMEFRAME, Timeframe};
