use thiserror::Error;

/// Unified error type for the cambio workspace.
///
/// Only `Init` is fatal to coordinator construction; everything else is a
/// library-surface error reported by backends, registries, or argument
/// validation. Degraded-but-usable conditions (a venue missing from the
/// credentials section, no streaming implementation registered) are not
/// errors at all and never appear here.
#[derive(Debug, Error)]
pub enum CambioError {
    /// A live backend was created but exposed no capability snapshot;
    /// initialization cannot proceed and is not retried.
    #[error("{venue}: failed to load venue capabilities")]
    Init {
        /// Venue identity the coordinator was connecting to.
        venue: String,
    },

    /// The requested capability is not implemented by the target backend.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "symbol-data").
        capability: &'static str,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A venue backend or streaming channel returned an error.
    #[error("{venue} failed: {msg}")]
    Venue {
        /// Venue identity that failed.
        venue: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource, pair, or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "symbol data for BTC/USDT".
        what: String,
    },
}

impl CambioError {
    /// Helper: build the fatal initialization error for a venue.
    pub fn init(venue: impl Into<String>) -> Self {
        Self::Init {
            venue: venue.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Venue` error with the venue identity and message.
    pub fn venue(venue: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Venue {
            venue: venue.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
