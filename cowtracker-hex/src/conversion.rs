//! Currency conversion and central bank series service.
//!
//! Wraps the conversion engine with the fallback policy: the static rate is
//! tried only after the primary source failed with `RateUnavailable`, and
//! only when it covers both currencies.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use cowtracker_types::{
    AppError, ConversionError, ConversionResponse, ConvertQuery, CurrencyCode,
    EconomicIndicators, PriceTrends, RateObservation, RateSource, RateSourceError, SeriesInfo,
    SeriesQuery, SeriesResponse, SeriesSource, SeriesTrend, TrendDirection, TrendsQuery,
};
use exchange_rates::{ConversionEngine, ConversionRequest, FallbackRate, format_conversion};

/// Trend period when the caller gives none.
pub const DEFAULT_TREND_DAYS: u32 = 30;
/// Longest trend period accepted.
pub const MAX_TREND_DAYS: u32 = 366;

/// Application service for conversions and statistical series.
pub struct ConversionService {
    engine: ConversionEngine<Arc<dyn RateSource>>,
    series: Arc<dyn SeriesSource>,
    fallback: Option<FallbackRate>,
}

impl ConversionService {
    pub fn new(rates: Arc<dyn RateSource>, series: Arc<dyn SeriesSource>) -> Self {
        Self {
            engine: ConversionEngine::new(rates),
            series,
            fallback: None,
        }
    }

    /// Enables the approximate fallback rate.
    pub fn with_fallback(mut self, fallback: Option<FallbackRate>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> Option<&FallbackRate> {
        self.fallback.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts an amount, substituting the fallback rate when the primary
    /// source cannot answer.
    pub async fn convert(&self, query: ConvertQuery) -> Result<ConversionResponse, AppError> {
        let request = ConversionRequest::parse(query.amount, &query.from, &query.to, query.date)?;

        let result = match self.engine.convert_request(&request).await {
            Ok(result) => result,
            Err(err @ ConversionError::RateUnavailable { .. }) => match &self.fallback {
                Some(fallback) if fallback.covers(request.from, request.to) => {
                    self.engine.convert_approximate(&request, fallback).await?
                }
                _ => return Err(err.into()),
            },
            Err(err) => return Err(err.into()),
        };

        let display = format_conversion(&result);
        let display_text = &display;
        info!(display = %display_text, source = ?result.source, "Converted amount");
        Ok(ConversionResponse { result, display })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Series
    // ─────────────────────────────────────────────────────────────────────────────

    /// Values of the series quoting `currency`, e.g. USD, UF or UTM.
    pub async fn currency_series(
        &self,
        currency: CurrencyCode,
        query: SeriesQuery,
    ) -> Result<SeriesResponse, AppError> {
        let code = self.quoted(currency)?;
        self.series(code, query).await
    }

    /// Values of an arbitrary series. The range defaults to today, and an
    /// omitted end date equals the start date.
    pub async fn series(&self, code: &str, query: SeriesQuery) -> Result<SeriesResponse, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::BadRequest("Series code cannot be empty".into()));
        }
        let start_date = query.start_date.unwrap_or_else(today);
        let end_date = query.end_date.unwrap_or(start_date);
        if start_date > end_date {
            return Err(AppError::BadRequest(format!(
                "start_date {} is after end_date {}",
                start_date, end_date
            )));
        }

        let data = self
            .series
            .fetch_series(code, start_date, end_date)
            .await
            .map_err(unavailable)?;

        Ok(SeriesResponse {
            series_id: code.to_string(),
            start_date,
            end_date,
            data,
        })
    }

    /// Latest dollar, UF and UTM values on or before `date` (default today).
    ///
    /// An indicator that cannot be fetched is reported as missing.
    pub async fn economic_indicators(&self, date: Option<NaiveDate>) -> EconomicIndicators {
        let date = date.unwrap_or_else(today);
        let (exchange_rate, uf, utm) = tokio::join!(
            self.indicator(CurrencyCode::USD, date),
            self.indicator(CurrencyCode::UF, date),
            self.indicator(CurrencyCode::UTM, date),
        );
        EconomicIndicators {
            date,
            exchange_rate,
            uf,
            utm,
        }
    }

    pub fn series_catalogue(&self) -> Vec<SeriesInfo> {
        self.series.catalogue()
    }

    /// Dollar and UF trends over the `days` before `end_date` (default today).
    pub async fn price_trends(&self, query: TrendsQuery) -> Result<PriceTrends, AppError> {
        let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
        if !(1..=MAX_TREND_DAYS).contains(&days) {
            return Err(AppError::BadRequest(format!(
                "days must be between 1 and {}",
                MAX_TREND_DAYS
            )));
        }
        let end_date = query.end_date.unwrap_or_else(today);
        let start_date = end_date
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| AppError::BadRequest(format!("end_date {} is out of range", end_date)))?;

        let usd_code = self.quoted(CurrencyCode::USD)?;
        let uf_code = self.quoted(CurrencyCode::UF)?;
        let (usd, uf) = tokio::try_join!(
            self.series.fetch_series(usd_code, start_date, end_date),
            self.series.fetch_series(uf_code, start_date, end_date),
        )
        .map_err(unavailable)?;

        let exchange_rate = SeriesTrend::analyze(&usd);
        let uf = SeriesTrend::analyze(&uf);
        let recommendations = trend_recommendations(&exchange_rate, &uf);
        info!(
            %start_date,
            %end_date,
            dollar = ?exchange_rate.trend,
            uf = ?uf.trend,
            "Analyzed price trends"
        );

        Ok(PriceTrends {
            start_date,
            end_date,
            exchange_rate,
            uf,
            recommendations,
        })
    }

    fn quoted(&self, currency: CurrencyCode) -> Result<&'static str, AppError> {
        self.series.series_for(currency).ok_or_else(|| {
            AppError::BadRequest(format!("{} is not quoted by the central bank", currency))
        })
    }

    async fn indicator(&self, currency: CurrencyCode, date: NaiveDate) -> Option<RateObservation> {
        match self.engine.source().lookup_rate(currency, date).await {
            Ok(obs) => obs,
            Err(e) => {
                warn!(%currency, %date, error = %e, "Indicator unavailable");
                None
            }
        }
    }
}

fn trend_recommendations(dollar: &SeriesTrend, uf: &SeriesTrend) -> Vec<String> {
    let mut out = Vec::new();
    match dollar.trend {
        TrendDirection::Increasing => {
            out.push("Dollar rising: consider selling in USD or holding inventory".to_string())
        }
        TrendDirection::Decreasing => {
            out.push("Dollar falling: good moment to import supplies".to_string())
        }
        _ => {}
    }
    if uf.trend == TrendDirection::Increasing {
        out.push("UF rising: prices quoted in UF may be more stable".to_string());
    }
    out
}

/// Adapter error text stays in the logs; callers only learn the bank is unavailable.
fn unavailable(err: RateSourceError) -> AppError {
    warn!(error = %err, "Central bank query failed");
    AppError::RateUnavailable("Central bank unavailable".into())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
