//! Statistical time-series values published by the central bank.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One dated value of a statistical series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeriesObservation {
    #[schema(example = "F073.TCO.PRE.Z.D")]
    pub series_id: String,
    pub date: NaiveDate,
    #[schema(value_type = f64, example = 950.12)]
    pub value: Decimal,
}

/// A well-known series code and what it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeriesInfo {
    #[schema(example = "F073.UF.PRE.Z.D")]
    pub code: String,
    #[schema(example = "Unidad de Fomento (UF)")]
    pub description: String,
}

impl SeriesInfo {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
