use core::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest interval real-time evaluation is allowed to run at.
///
/// Appended to every resolved timeframe list so internal scheduling always
/// has a fast cadence available, whatever the user configured.
pub const MIN_EVAL_TIMEFRAME: Timeframe = Timeframe::I1m;

/// Candle interval, ordered by duration.
///
/// The serialized form is the exchange-conventional short string
/// ("1m", "1h", "1d", ...), which is also what venue capability snapshots
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    /// One minute.
    #[serde(rename = "1m")]
    I1m,
    /// Three minutes.
    #[serde(rename = "3m")]
    I3m,
    /// Five minutes.
    #[serde(rename = "5m")]
    I5m,
    /// Fifteen minutes.
    #[serde(rename = "15m")]
    I15m,
    /// Thirty minutes.
    #[serde(rename = "30m")]
    I30m,
    /// One hour.
    #[serde(rename = "1h")]
    I1h,
    /// Two hours.
    #[serde(rename = "2h")]
    I2h,
    /// Four hours.
    #[serde(rename = "4h")]
    I4h,
    /// Six hours.
    #[serde(rename = "6h")]
    I6h,
    /// Eight hours.
    #[serde(rename = "8h")]
    I8h,
    /// Twelve hours.
    #[serde(rename = "12h")]
    I12h,
    /// One day.
    #[serde(rename = "1d")]
    D1,
    /// Three days.
    #[serde(rename = "3d")]
    D3,
    /// One week.
    #[serde(rename = "1w")]
    W1,
    /// One month (30 days).
    #[serde(rename = "1M")]
    Mo1,
}

impl Timeframe {
    /// Every interval, shortest first. Handy for building snapshots and
    /// for property-test generators.
    pub const ALL: &'static [Self] = &[
        Self::I1m,
        Self::I3m,
        Self::I5m,
        Self::I15m,
        Self::I30m,
        Self::I1h,
        Self::I2h,
        Self::I4h,
        Self::I6h,
        Self::I8h,
        Self::I12h,
        Self::D1,
        Self::D3,
        Self::W1,
        Self::Mo1,
    ];

    /// Interval length in seconds.
    #[must_use]
    pub const fn secs(self) -> u64 {
        match self {
            Self::I1m => 60,
            Self::I3m => 3 * 60,
            Self::I5m => 5 * 60,
            Self::I15m => 15 * 60,
            Self::I30m => 30 * 60,
            Self::I1h => 3600,
            Self::I2h => 2 * 3600,
            Self::I4h => 4 * 3600,
            Self::I6h => 6 * 3600,
            Self::I8h => 8 * 3600,
            Self::I12h => 12 * 3600,
            Self::D1 => 86_400,
            Self::D3 => 3 * 86_400,
            Self::W1 => 7 * 86_400,
            Self::Mo1 => 30 * 86_400,
        }
    }

    /// Interval length as a `Duration`.
    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.secs())
    }

    /// Stable short identifier, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I3m => "3m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I1h => "1h",
            Self::I2h => "2h",
            Self::I4h => "4h",
            Self::I6h => "6h",
            Self::I8h => "8h",
            Self::I12h => "12h",
            Self::D1 => "1d",
            Self::D3 => "3d",
            Self::W1 => "1w",
            Self::Mo1 => "1M",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
