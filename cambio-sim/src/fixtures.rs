//! Deterministic fixture data. Same pair in, same series out, across runs
//! and platforms; no randomness anywhere.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use cambio_core::{Balance, Candle, Order, OrderStatus, PersonalData, Side, SymbolData, Ticker};

const CANDLES_PER_SERIES: usize = 48;
const STEP_MS: f64 = 3_600_000.0;

fn series_origin_ms() -> f64 {
    // Fixed origin so fixture timestamps are stable across runs.
    #[allow(clippy::cast_precision_loss)]
    let ms = Utc
        .with_ymd_and_hms(2023, 10, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis() as f64;
    ms
}

// FNV-1a; spreads pair names into distinct but reproducible price levels.
fn seed(pair: &str) -> u64 {
    pair.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn drift(seed: u64, i: usize) -> i64 {
    let rotated = seed.rotate_left(u32::try_from(i % 17).unwrap_or(0));
    i64::try_from(rotated % 9).unwrap_or(0) - 4
}

/// Hourly candle series for a pair, oldest first, timestamps in raw
/// milliseconds as a live venue would deliver them.
pub fn candles(pair: &str) -> Vec<Candle> {
    let s = seed(pair);
    let base = i64::try_from(50 + (s % 950)).unwrap_or(500);
    let origin = series_origin_ms();

    (0..CANDLES_PER_SERIES)
        .map(|i| {
            let open = base + drift(s, i);
            let close = base + drift(s, i + 1);
            #[allow(clippy::cast_precision_loss)]
            let ts = origin + STEP_MS * i as f64;
            Candle {
                ts,
                open: Decimal::from(open),
                high: Decimal::from(open.max(close) + 1),
                low: Decimal::from(open.min(close) - 1),
                close: Decimal::from(close),
                volume: Decimal::from(10 + drift(s, i).abs()),
            }
        })
        .collect()
}

/// Candles plus a ticker derived from the last candle.
pub fn symbol_data(pair: &str) -> SymbolData {
    let candles = candles(pair);
    let last = candles.last().expect("fixture series is never empty");
    let ticker = Ticker {
        pair: pair.to_string(),
        last: last.close,
        bid: Some(last.close - Decimal::ONE),
        ask: Some(last.close + Decimal::ONE),
        ts: last.ts,
    };
    SymbolData {
        pair: pair.to_string(),
        candles,
        ticker: Some(ticker),
    }
}

/// Fixed account view: a couple of balances and one resting order.
pub fn personal_data() -> PersonalData {
    PersonalData {
        balances: vec![
            Balance {
                asset: "BTC".to_string(),
                free: Decimal::new(15, 1),
                locked: Decimal::new(5, 1),
            },
            Balance {
                asset: "USDT".to_string(),
                free: Decimal::from(10_000),
                locked: Decimal::ZERO,
            },
        ],
        open_orders: vec![Order {
            id: "sim-1".to_string(),
            pair: "BTC/USDT".to_string(),
            side: Side::Buy,
            amount: Decimal::new(25, 2),
            price: Some(Decimal::from(30_000)),
            status: OrderStatus::Open,
        }],
    }
}
