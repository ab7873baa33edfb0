//! Statistical series port.

use chrono::NaiveDate;
use exchange_rates::{CurrencyCode, RateSourceError};

use crate::domain::{SeriesInfo, SeriesObservation};

/// Raw access to the central bank's time series.
#[async_trait::async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetches every published value of `code` between the two dates, inclusive.
    async fn fetch_series(
        &self,
        code: &str,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<SeriesObservation>, RateSourceError>;

    /// Commonly used series.
    fn catalogue(&self) -> Vec<SeriesInfo>;

    /// The series quoting `currency` in local currency, if any.
    fn series_for(&self, currency: CurrencyCode) -> Option<&'static str>;
}
