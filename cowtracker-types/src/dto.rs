//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::NaiveDate;
use exchange_rates::{ConversionResult, RateObservation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CowPatch, HealthStatus, NewCow, SeriesObservation, SeriesTrend};

// ─────────────────────────────────────────────────────────────────────────────
// Cow DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new cow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCowRequest {
    #[schema(example = "Bessie")]
    pub name: String,
    #[schema(example = "Holstein")]
    pub breed: String,
    #[schema(example = 3)]
    pub age: u32,
    #[schema(example = 650.5)]
    pub weight: f64,
    #[serde(default)]
    pub health_status: HealthStatus,
}

impl From<CreateCowRequest> for NewCow {
    fn from(req: CreateCowRequest) -> Self {
        NewCow {
            name: req.name,
            breed: req.breed,
            age: req.age,
            weight: req.weight,
            health_status: req.health_status,
        }
    }
}

/// Request to update some fields of a cow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCowRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
}

impl From<UpdateCowRequest> for CowPatch {
    fn from(req: UpdateCowRequest) -> Self {
        CowPatch {
            name: req.name,
            breed: req.breed,
            age: req.age,
            weight: req.weight,
            health_status: req.health_status,
        }
    }
}

/// Confirmation returned after removing a cow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteCowResponse {
    #[schema(example = "Cow Bessie deleted")]
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters of the conversion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Amount to convert
    #[param(value_type = f64, example = 1500000)]
    pub amount: Decimal,
    /// Source currency code
    #[param(example = "CLP")]
    pub from: String,
    /// Target currency code
    #[param(example = "USD")]
    pub to: String,
    /// Observation date (ISO), defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Conversion result plus its rendered form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    #[serde(flatten)]
    pub result: ConversionResult,
    /// e.g. "$1,500,000 / 1,578.95 US$"
    pub display: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Series DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Date range of a series query; both ends default to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeriesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Values of one series over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeriesResponse {
    #[schema(example = "F073.UF.PRE.Z.D")]
    pub series_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub data: Vec<SeriesObservation>,
}

/// Query of the economic indicators endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IndicatorsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Latest dollar, UF and UTM values on or before a date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EconomicIndicators {
    pub date: NaiveDate,
    pub exchange_rate: Option<RateObservation>,
    pub uf: Option<RateObservation>,
    pub utm: Option<RateObservation>,
}

/// Query of the price trends endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendsQuery {
    /// Days before `end_date` to analyze, 30 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[param(example = 30)]
    pub days: Option<u32>,
    /// Last day of the period, defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Dollar and UF movement over a period, with pricing advice.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceTrends {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub exchange_rate: SeriesTrend,
    pub uf: SeriesTrend,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange_rates::{CurrencyCode, RateProvenance};
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_request_defaults_to_healthy() {
        let req: CreateCowRequest = serde_json::from_str(
            r#"{"name":"Daisy","breed":"Jersey","age":2,"weight":450.0}"#,
        )
        .unwrap();
        assert_eq!(req.health_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_conversion_response_is_flat() {
        let response = ConversionResponse {
            result: ConversionResult {
                amount: dec!(100),
                from: CurrencyCode::USD,
                to: CurrencyCode::EUR,
                converted_amount: dec!(92.23),
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                rate: dec!(1030),
                intermediate_local_amount: Some(dec!(95000)),
                rate_date: NaiveDate::from_ymd_opt(2024, 5, 31),
                source: RateProvenance::ApproximateFallback,
            },
            display: "US$100.00 / 92.23 €".into(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["converted_amount"], 92.23);
        assert_eq!(json["intermediate_local_amount"], 95000.0);
        assert_eq!(json["source"], "approximate-fallback");
        assert_eq!(json["from"], "USD");
        assert_eq!(json["rate_date"], "2024-05-31");
    }
}
