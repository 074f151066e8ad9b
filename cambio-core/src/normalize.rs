//! Timestamp plausibility checks and in-place batch correction.
//!
//! Venues disagree on the unit and epoch of candle timestamps (milliseconds
//! where seconds are expected is the usual offender). The coordinator
//! decides per batch whether correction is needed by checking the **first**
//! record only, then rewrites every record through the venue's own
//! conversion. First-record-decides-for-the-batch assumes batches are
//! homogeneous; a malformed leading record can suppress correction for an
//! otherwise valid batch, or force it on one that did not need it. Known
//! edge case, kept on purpose.

use crate::market::Candle;

/// Smallest epoch-second value a calendar can represent (year 1).
pub const MIN_PLAUSIBLE_TIMESTAMP: f64 = -62_135_596_800.0;
/// Largest epoch-second value a calendar can represent (year 9999).
pub const MAX_PLAUSIBLE_TIMESTAMP: f64 = 253_402_300_799.0;

/// Bounded plausibility check for an epoch-seconds timestamp.
///
/// Millisecond-scale values fall outside the representable calendar range
/// and fail the check. Zero passes: an unset timestamp carries no unit
/// information and is left alone rather than "corrected" into garbage.
#[must_use]
pub fn is_plausible_timestamp(ts: f64) -> bool {
    if ts == 0.0 {
        return true;
    }
    ts.is_finite() && (MIN_PLAUSIBLE_TIMESTAMP..=MAX_PLAUSIBLE_TIMESTAMP).contains(&ts)
}

/// Whether a timestamp must be rewritten into canonical form.
#[must_use]
pub fn needs_uniformization(ts: f64) -> bool {
    !is_plausible_timestamp(ts)
}

/// Rewrite every candle's timestamp in place through `convert`.
///
/// Unconditional by design: the decision whether a batch needs rewriting
/// belongs to the caller, which has already inspected the leading record.
pub fn uniformize_candles(candles: &mut [Candle], convert: impl Fn(f64) -> f64) {
    for candle in candles {
        candle.ts = convert(candle.ts);
    }
}
