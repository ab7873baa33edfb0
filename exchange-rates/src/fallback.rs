//! Static approximate rate used when the primary rate source is down.
//!
//! Exactly one reference foreign currency can be covered. Indexed units are
//! never eligible: there is no meaningful static approximation for them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{CurrencyCode, RateObservation, RateSource, RateSourceError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackRateError {
    #[error("Indexed unit {0} cannot have a static fallback rate")]
    IndexedUnit(CurrencyCode),

    #[error("The local currency cannot be a fallback reference")]
    LocalCurrency,

    #[error("Fallback rate must be positive, got {0}")]
    NonPositiveRate(Decimal),
}

/// A single static quote: 1 `reference` = `local_per_unit` local units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRate {
    reference: CurrencyCode,
    local_per_unit: Decimal,
}

impl FallbackRate {
    pub fn new(reference: CurrencyCode, local_per_unit: Decimal) -> Result<Self, FallbackRateError> {
        if reference.is_indexed() {
            return Err(FallbackRateError::IndexedUnit(reference));
        }
        if reference.is_local() {
            return Err(FallbackRateError::LocalCurrency);
        }
        if local_per_unit <= Decimal::ZERO {
            return Err(FallbackRateError::NonPositiveRate(local_per_unit));
        }
        Ok(Self {
            reference,
            local_per_unit,
        })
    }

    pub fn reference(&self) -> CurrencyCode {
        self.reference
    }

    pub fn local_per_unit(&self) -> Decimal {
        self.local_per_unit
    }

    /// Whether this fallback can answer a conversion between the two codes.
    pub fn covers(&self, from: CurrencyCode, to: CurrencyCode) -> bool {
        let covered = |c: CurrencyCode| c.is_local() || c == self.reference;
        covered(from) && covered(to)
    }
}

#[async_trait::async_trait]
impl RateSource for FallbackRate {
    async fn lookup_rate(
        &self,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, RateSourceError> {
        if currency != self.reference {
            return Ok(None);
        }
        Ok(Some(RateObservation::new(currency, date, self.local_per_unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_indexed_units_rejected() {
        assert_eq!(
            FallbackRate::new(CurrencyCode::UF, dec!(37000)),
            Err(FallbackRateError::IndexedUnit(CurrencyCode::UF))
        );
        assert_eq!(
            FallbackRate::new(CurrencyCode::UTM, dec!(65000)),
            Err(FallbackRateError::IndexedUnit(CurrencyCode::UTM))
        );
    }

    #[test]
    fn test_local_and_non_positive_rejected() {
        assert_eq!(
            FallbackRate::new(CurrencyCode::CLP, dec!(1)),
            Err(FallbackRateError::LocalCurrency)
        );
        assert!(matches!(
            FallbackRate::new(CurrencyCode::USD, dec!(0)),
            Err(FallbackRateError::NonPositiveRate(_))
        ));
    }

    #[test]
    fn test_covers_only_reference_and_local() {
        let fallback = FallbackRate::new(CurrencyCode::USD, dec!(950)).unwrap();
        assert!(fallback.covers(CurrencyCode::CLP, CurrencyCode::USD));
        assert!(fallback.covers(CurrencyCode::USD, CurrencyCode::CLP));
        assert!(!fallback.covers(CurrencyCode::USD, CurrencyCode::EUR));
        assert!(!fallback.covers(CurrencyCode::CLP, CurrencyCode::UF));
    }

    #[tokio::test]
    async fn test_lookup_answers_reference_only() {
        let fallback = FallbackRate::new(CurrencyCode::USD, dec!(950)).unwrap();

        let usd = fallback.lookup_rate(CurrencyCode::USD, day()).await.unwrap();
        assert_eq!(usd, Some(RateObservation::new(CurrencyCode::USD, day(), dec!(950))));

        let eur = fallback.lookup_rate(CurrencyCode::EUR, day()).await.unwrap();
        assert!(eur.is_none());
    }
}
