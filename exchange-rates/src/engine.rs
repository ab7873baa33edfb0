//! Currency conversion engine.
//!
//! All conversions pivot through the local currency:
//! - identical codes never touch the rate source;
//! - local <-> foreign uses one observation of the foreign side;
//! - foreign <-> foreign runs two local-pivot legs, feeding leg 1's
//!   unrounded amount into leg 2.
//!
//! The engine holds no state besides its rate source, performs no retries
//! and never applies the fallback rate on its own.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::{ConversionError, CurrencyCode, FallbackRate, RateObservation, RateSource};

/// Decimal places of every reported `converted_amount`.
pub const MONEY_DECIMALS: u32 = 2;

/// Rounds a monetary amount to [`MONEY_DECIMALS`], halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / Result
// ─────────────────────────────────────────────────────────────────────────────

/// A conversion to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub date: NaiveDate,
}

impl ConversionRequest {
    /// Builds a request, defaulting the date to today.
    pub fn new(
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            amount,
            from,
            to,
            date: date.unwrap_or_else(today),
        }
    }

    /// Builds a request from raw currency codes.
    pub fn parse(
        amount: Decimal,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<Self, ConversionError> {
        Ok(Self::new(amount, from.parse()?, to.parse()?, date))
    }
}

/// Where the rate behind a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RateProvenance {
    #[serde(rename = "primary")]
    Primary,
    #[serde(rename = "approximate-fallback")]
    ApproximateFallback,
}

/// Outcome of a conversion.
///
/// `rate` is always quoted as "1 foreign unit = X local units"; for
/// foreign-to-foreign conversions it is the target currency's rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    #[schema(value_type = f64, example = 1500000)]
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    #[schema(value_type = f64, example = 1578.95)]
    pub converted_amount: Decimal,
    pub date: NaiveDate,
    #[schema(value_type = f64, example = 950.0)]
    pub rate: Decimal,
    /// Local-currency value of leg 1, present only for foreign-to-foreign conversions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub intermediate_local_amount: Option<Decimal>,
    /// Observation date of `rate`; absent for identity conversions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_date: Option<NaiveDate>,
    pub source: RateProvenance,
}

impl ConversionResult {
    fn identity(request: &ConversionRequest) -> Self {
        Self {
            amount: request.amount,
            from: request.from,
            to: request.to,
            converted_amount: request.amount,
            date: request.date,
            rate: Decimal::ONE,
            intermediate_local_amount: None,
            rate_date: None,
            source: RateProvenance::Primary,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Converts amounts using an injected [`RateSource`].
pub struct ConversionEngine<S: RateSource> {
    source: S,
}

impl<S: RateSource> ConversionEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Converts `amount` between two raw currency codes.
    ///
    /// Unknown codes fail with `UnsupportedCurrency` before any lookup.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<ConversionResult, ConversionError> {
        let request = ConversionRequest::parse(amount, from, to, date)?;
        self.convert_request(&request).await
    }

    /// Converts using the primary rate source.
    pub async fn convert_request(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        run(&self.source, RateProvenance::Primary, request).await
    }

    /// Converts using only the static fallback rate.
    ///
    /// Pairs the fallback does not cover fail with `RateUnavailable`.
    pub async fn convert_approximate(
        &self,
        request: &ConversionRequest,
        fallback: &FallbackRate,
    ) -> Result<ConversionResult, ConversionError> {
        let result = run(fallback, RateProvenance::ApproximateFallback, request).await?;
        warn!(
            from = %request.from,
            to = %request.to,
            date = %request.date,
            rate = %fallback.local_per_unit(),
            "Conversion used approximate fallback rate"
        );
        Ok(result)
    }
}

/// Unrounded outcome of one local-pivot leg.
struct Leg {
    amount: Decimal,
    observation: RateObservation,
}

async fn run<R: RateSource + ?Sized>(
    source: &R,
    provenance: RateProvenance,
    request: &ConversionRequest,
) -> Result<ConversionResult, ConversionError> {
    let ConversionRequest {
        amount,
        from,
        to,
        date,
    } = *request;

    if from == to {
        return Ok(ConversionResult::identity(request));
    }

    if from.is_local() || to.is_local() {
        let leg = pivot(source, amount, from, to, date).await?;
        return Ok(ConversionResult {
            amount,
            from,
            to,
            converted_amount: round_money(leg.amount),
            date,
            rate: leg.observation.value,
            intermediate_local_amount: None,
            rate_date: Some(leg.observation.date),
            source: provenance,
        });
    }

    let to_local = pivot(source, amount, from, CurrencyCode::LOCAL, date).await?;
    debug!(%from, local_amount = %to_local.amount, "Leg 1 converted to local currency");

    let from_local = pivot(source, to_local.amount, CurrencyCode::LOCAL, to, date).await?;
    debug!(%to, amount = %from_local.amount, "Leg 2 converted from local currency");

    Ok(ConversionResult {
        amount,
        from,
        to,
        converted_amount: round_money(from_local.amount),
        date,
        rate: from_local.observation.value,
        intermediate_local_amount: Some(to_local.amount),
        rate_date: Some(from_local.observation.date),
        source: provenance,
    })
}

/// Converts between the local currency and one foreign currency.
async fn pivot<R: RateSource + ?Sized>(
    source: &R,
    amount: Decimal,
    from: CurrencyCode,
    to: CurrencyCode,
    date: NaiveDate,
) -> Result<Leg, ConversionError> {
    let foreign = if from.is_local() { to } else { from };
    let observation = fetch(source, foreign, date).await?;

    let amount = if from.is_local() {
        amount.checked_div(observation.value)
    } else {
        amount.checked_mul(observation.value)
    }
    .ok_or(ConversionError::AmountOutOfRange { currency: to })?;

    Ok(Leg {
        amount,
        observation,
    })
}

async fn fetch<R: RateSource + ?Sized>(
    source: &R,
    currency: CurrencyCode,
    date: NaiveDate,
) -> Result<RateObservation, ConversionError> {
    let unavailable = ConversionError::RateUnavailable { currency, date };

    match source.lookup_rate(currency, date).await {
        Ok(Some(obs))
            if obs.currency == currency && obs.date <= date && obs.value > Decimal::ZERO =>
        {
            Ok(obs)
        }
        Ok(Some(obs)) => {
            warn!(%currency, %date, observation = ?obs, "Discarding unusable rate observation");
            Err(unavailable)
        }
        Ok(None) => {
            debug!(%currency, %date, "No rate observation available");
            Err(unavailable)
        }
        Err(e) => {
            warn!(%currency, %date, error = %e, "Rate source lookup failed");
            Err(unavailable)
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
