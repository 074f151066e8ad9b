//! Market-data and account containers served through the façade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV candle.
///
/// `ts` is a raw epoch value on purpose: venues disagree on unit and epoch,
/// and the coordinator normalizes batches to canonical epoch seconds after
/// the fact (see [`crate::normalize`]). A typed datetime here would erase
/// exactly the state that normalization manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Epoch timestamp; canonical form is seconds.
    pub ts: f64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base-asset volume.
    pub volume: Decimal,
}

/// Point-in-time price snapshot for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Trading pair, e.g. "BTC/USDT".
    pub pair: String,
    /// Last traded price.
    pub last: Decimal,
    /// Best bid, when the venue reports one.
    pub bid: Option<Decimal>,
    /// Best ask, when the venue reports one.
    pub ask: Option<Decimal>,
    /// Epoch timestamp; canonical form is seconds.
    pub ts: f64,
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Buy the base asset.
    Buy,
    /// Sell the base asset.
    Sell,
}

/// Order lifecycle state as the venue reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Resting on the book.
    Open,
    /// Fully executed.
    Filled,
    /// Canceled before completion.
    Canceled,
}

/// A venue-reported order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Venue-assigned order id.
    pub id: String,
    /// Trading pair.
    pub pair: String,
    /// Side.
    pub side: Side,
    /// Base-asset amount.
    pub amount: Decimal,
    /// Limit price; `None` for market orders.
    pub price: Option<Decimal>,
    /// Current state.
    pub status: OrderStatus,
}

/// Balance of a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Asset code, e.g. "BTC".
    pub asset: String,
    /// Amount available for trading.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

/// Everything downstream consumers read about one trading pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolData {
    /// Trading pair this container describes.
    pub pair: String,
    /// Recent candles, oldest first.
    pub candles: Vec<Candle>,
    /// Latest ticker, when available.
    pub ticker: Option<Ticker>,
}

/// Account view: balances and open orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonalData {
    /// Per-asset balances.
    pub balances: Vec<Balance>,
    /// Orders currently resting on the venue.
    pub open_orders: Vec<Order>,
}
