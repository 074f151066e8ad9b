mod helpers;

use cambio::{CambioError, ExchangeCoordinator};
use helpers::{MockBackend, VENUE};

#[tokio::test]
async fn missing_snapshot_is_fatal_and_names_the_venue() {
    let err = ExchangeCoordinator::builder(helpers::streaming_config(), VENUE)
        .backend(MockBackend::without_client(VENUE))
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, CambioError::Init { ref venue } if venue == VENUE));
    assert!(err.to_string().contains(VENUE));
}

#[tokio::test]
async fn simulated_mode_sidesteps_the_snapshot_requirement() {
    // The same clientless backend is fine when nothing is loaded from it;
    // this is the fallback a caller may take after a fatal live init.
    let coordinator = ExchangeCoordinator::builder(helpers::streaming_config(), VENUE)
        .backend(MockBackend::without_client(VENUE))
        .simulated(true)
        .build()
        .await
        .expect("simulated construction succeeds");

    assert!(coordinator.is_ready());
}

#[tokio::test]
async fn missing_backend_is_a_builder_error() {
    let err = ExchangeCoordinator::builder(helpers::streaming_config(), VENUE)
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, CambioError::InvalidArg(_)));
}

#[tokio::test]
async fn backend_venue_mismatch_is_a_builder_error() {
    let err = ExchangeCoordinator::builder(helpers::streaming_config(), VENUE)
        .backend(MockBackend::live("kraken"))
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, CambioError::InvalidArg(_)));
}
