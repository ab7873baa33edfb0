//! Exchange Rates Library with Local-Currency Pivot Conversion
//!
//! This library holds the currency catalogue and the conversion engine.
//! Rates are consumed through the [`RateSource`] port; the engine never
//! performs IO itself, so it can be driven by the central bank adapter in
//! production and by a fake in tests.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation in `currency.rs`:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     MXN => ("MXN", "Mexican Peso", "MX$", Foreign, 2),
//! }
//! ```
//! and map it to a series in the rate source adapter.
//!
//! # Example
//! ```ignore
//! use exchange_rates::{ConversionEngine, format_conversion};
//!
//! let engine = ConversionEngine::new(rate_source);
//! let result = engine.convert(dec!(1500000), "CLP", "USD", None).await?;
//! println!("{}", format_conversion(&result)); // $1,500,000 / 1,578.95 US$
//! ```

mod currency;
mod engine;
mod error;
mod fallback;
mod format;
mod source;

pub use currency::{CurrencyCode, CurrencyKind};
pub use engine::{
    ConversionEngine, ConversionRequest, ConversionResult, MONEY_DECIMALS, RateProvenance,
    round_money,
};
pub use error::{ConversionError, RateSourceError};
pub use fallback::{FallbackRate, FallbackRateError};
pub use format::{format_amount, format_conversion};
pub use source::{RateObservation, RateSource};
