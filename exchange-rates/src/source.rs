//! Rate source port.
//!
//! The engine consumes exchange rates through this single-method trait.
//! Adapters (the central bank client, static fallback tables, test fakes)
//! normalise whatever they talk to into one `RateObservation` shape.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{CurrencyCode, RateSourceError};

/// One point-in-time quote: 1 unit of `currency` = `value` units of local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RateObservation {
    pub currency: CurrencyCode,
    pub date: NaiveDate,
    #[schema(value_type = f64, example = 950.0)]
    pub value: Decimal,
}

impl RateObservation {
    pub fn new(currency: CurrencyCode, date: NaiveDate, value: Decimal) -> Self {
        Self {
            currency,
            date,
            value,
        }
    }
}

/// Port trait for exchange rate sources.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Returns the most recent observation of `currency` on or before `date`.
    ///
    /// `Ok(None)` means the source has no data for that window.
    async fn lookup_rate(
        &self,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, RateSourceError>;
}

#[async_trait::async_trait]
impl<T: RateSource + ?Sized> RateSource for Arc<T> {
    async fn lookup_rate(
        &self,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, RateSourceError> {
        (**self).lookup_rate(currency, date).await
    }
}
