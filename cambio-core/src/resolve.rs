//! Pure resolution of usable timeframes and trading pairs.
//!
//! Both functions intersect user configuration with what a venue reports as
//! supported. Partial coverage is expected and normal: configured entries
//! the venue does not know are silently dropped, never errors.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::config::InstrumentGroup;
use crate::timeframe::Timeframe;

/// Shortest candidate interval at or above `floor`, falling back to `floor`
/// itself when the candidates have nothing that fast.
#[must_use]
pub fn find_min_timeframe(candidates: &[Timeframe], floor: Timeframe) -> Timeframe {
    candidates
        .iter()
        .copied()
        .filter(|tf| *tf >= floor)
        .min()
        .unwrap_or(floor)
}

/// Intersect the configured intervals with the venue-supported set,
/// preserving configured order, then append the shortest venue interval
/// at or above `min_eval` when it is not already present.
///
/// The appended interval exists for internal scheduling, so the result can
/// legally be a single synthesized entry when the venue supports none of
/// the configured intervals; callers decide whether that is acceptable.
#[must_use]
pub fn resolve_timeframes(
    configured: &[Timeframe],
    venue_supported: &[Timeframe],
    min_eval: Timeframe,
) -> Vec<Timeframe> {
    let mut resolved: Vec<Timeframe> = configured
        .iter()
        .copied()
        .filter(|tf| venue_supported.contains(tf))
        .collect();

    let shortest = find_min_timeframe(venue_supported, min_eval);
    if !resolved.contains(&shortest) {
        resolved.push(shortest);
    }
    resolved
}

/// Flatten the configured instrument groups and keep every pair the venue
/// actually trades. First occurrence wins when a pair is configured under
/// more than one asset; callers treat the result as a set.
#[must_use]
pub fn resolve_pairs(
    instruments: &HashMap<String, InstrumentGroup>,
    venue_symbols: &[String],
) -> Vec<String> {
    let known: HashSet<&str> = venue_symbols.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::new();
    for group in instruments.values() {
        for pair in &group.pairs {
            if known.contains(pair.as_str()) && seen.insert(pair.as_str()) {
                resolved.push(pair.clone());
            }
        }
    }
    resolved
}
