//! Error types for conversions and rate lookups.

use chrono::NaiveDate;

use crate::CurrencyCode;

/// Errors surfaced by the conversion engine.
///
/// Every failure names the offending currency so callers can decide
/// between retrying, applying the fallback rate or reporting to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Rate not available for {currency} on {date}")]
    RateUnavailable { currency: CurrencyCode, date: NaiveDate },

    #[error("Amount is too large to convert to {currency}")]
    AmountOutOfRange { currency: CurrencyCode },
}

impl ConversionError {
    /// Stable identifier used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::UnsupportedCurrency(_) => "UnsupportedCurrency",
            ConversionError::RateUnavailable { .. } => "RateUnavailable",
            ConversionError::AmountOutOfRange { .. } => "AmountOutOfRange",
        }
    }
}

/// Failures reported by a rate source adapter.
///
/// The engine never inspects these beyond logging them: all of them mean
/// "no usable observation".
#[derive(Debug, thiserror::Error)]
pub enum RateSourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream error {code}: {message}")]
    Upstream { code: i64, message: String },

    #[error("Rate source credentials are not configured")]
    MissingCredentials,

    #[error("Could not decode rate source response: {0}")]
    Decode(String),
}
