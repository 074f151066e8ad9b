mod helpers;

use cambio::{Candle, ExchangeCoordinator};
use helpers::{MockBackend, VENUE};
use rust_decimal::Decimal;

fn candle(ts: f64) -> Candle {
    let p = Decimal::new(30_000, 0);
    Candle {
        ts,
        open: p,
        high: p,
        low: p,
        close: p,
        volume: Decimal::TEN,
    }
}

async fn coordinator() -> ExchangeCoordinator {
    // MockBackend's conversion divides by 1000 (a milliseconds venue).
    ExchangeCoordinator::builder(helpers::rest_only_config(), VENUE)
        .backend(MockBackend::live(VENUE))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn canonical_batch_is_left_untouched() {
    let c = coordinator().await;
    let mut batch = vec![candle(1_696_118_400.0), candle(1_696_118_460.0)];
    let before = batch.clone();

    c.uniformize_candles_if_necessary(&mut batch);
    c.uniformize_candles_if_necessary(&mut batch);

    assert_eq!(batch, before);
}

#[tokio::test]
async fn millisecond_batch_is_rewritten_in_place() {
    let c = coordinator().await;
    let mut batch = vec![
        candle(1_696_118_400_000.0),
        candle(1_696_118_460_000.0),
        candle(1_696_118_520_000.0),
    ];

    c.uniformize_candles_if_necessary(&mut batch);

    let ts: Vec<f64> = batch.iter().map(|c| c.ts).collect();
    assert_eq!(ts, vec![1_696_118_400.0, 1_696_118_460.0, 1_696_118_520.0]);
}

// The first record decides for the whole batch: records that were already
// canonical get rewritten too. Documented policy, not a bug.
#[tokio::test]
async fn first_record_decides_for_the_batch() {
    let c = coordinator().await;
    let mut batch = vec![
        candle(1_696_118_400_000.0), // implausible, triggers correction
        candle(1_696_118_460.0),     // already canonical, rewritten anyway
    ];

    c.uniformize_candles_if_necessary(&mut batch);

    assert_eq!(batch[0].ts, 1_696_118_400.0);
    assert_eq!(batch[1].ts, 1_696_118.46);
}

// ... and the mirror image: a plausible first record suppresses correction
// for implausible later ones.
#[tokio::test]
async fn plausible_first_record_suppresses_correction() {
    let c = coordinator().await;
    let mut batch = vec![candle(1_696_118_400.0), candle(1_696_118_460_000.0)];
    let before = batch.clone();

    c.uniformize_candles_if_necessary(&mut batch);

    assert_eq!(batch, before);
}

#[tokio::test]
async fn single_candle_entry_point_checks_that_record() {
    let c = coordinator().await;

    let mut ms = candle(1_696_118_400_000.0);
    c.uniformize_candle_if_necessary(&mut ms);
    assert_eq!(ms.ts, 1_696_118_400.0);

    let mut ok = candle(1_696_118_400.0);
    c.uniformize_candle_if_necessary(&mut ok);
    assert_eq!(ok.ts, 1_696_118_400.0);
}

#[tokio::test]
async fn empty_batch_is_a_noop() {
    let c = coordinator().await;
    let mut batch: Vec<Candle> = vec![];
    c.uniformize_candles_if_necessary(&mut batch);
    assert!(batch.is_empty());
}
