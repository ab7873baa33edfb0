//! Direction and spread of a statistical series over a period.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::SeriesObservation;

/// Change beyond which a series counts as moving, in percent.
pub const TREND_THRESHOLD_PERCENT: Decimal = Decimal::TWO;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

/// Summary of a series between its first and last observation.
///
/// The figures are absent when fewer than two usable observations exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeriesTrend {
    pub trend: TrendDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub first_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub last_value: Option<Decimal>,
    /// Change from first to last value, in percent, 2 decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 2.55)]
    pub change_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub min_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub max_value: Option<Decimal>,
    /// Mean of all values, 2 decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub avg_value: Option<Decimal>,
}

impl SeriesTrend {
    fn insufficient() -> Self {
        Self {
            trend: TrendDirection::InsufficientData,
            first_value: None,
            last_value: None,
            change_percent: None,
            min_value: None,
            max_value: None,
            avg_value: None,
        }
    }

    /// Analyzes observations in date order.
    pub fn analyze(observations: &[SeriesObservation]) -> Self {
        let mut sorted: Vec<&SeriesObservation> = observations.iter().collect();
        sorted.sort_by_key(|obs| obs.date);
        let values: Vec<Decimal> = sorted.iter().map(|obs| obs.value).collect();

        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return Self::insufficient();
        };
        if values.len() < 2 || first.is_zero() {
            return Self::insufficient();
        }

        let Some(change) = (last - first)
            .checked_div(first)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        else {
            return Self::insufficient();
        };
        let sum = values
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v));
        let avg = sum.and_then(|s| s.checked_div(Decimal::from(values.len())));

        let trend = if change > TREND_THRESHOLD_PERCENT {
            TrendDirection::Increasing
        } else if change < -TREND_THRESHOLD_PERCENT {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        Self {
            trend,
            first_value: Some(first),
            last_value: Some(last),
            change_percent: Some(round2(change)),
            min_value: values.iter().min().copied(),
            max_value: values.iter().max().copied(),
            avg_value: avg.map(round2),
        }
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn series(values: &[Decimal]) -> Vec<SeriesObservation> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| SeriesObservation {
                series_id: "F073.TCO.PRE.Z.D".into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 1 + i as u32).unwrap(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_rising_series() {
        let trend = SeriesTrend::analyze(&series(&[dec!(940), dec!(925.5), dec!(965)]));

        assert_eq!(trend.trend, TrendDirection::Increasing);
        assert_eq!(trend.first_value, Some(dec!(940)));
        assert_eq!(trend.last_value, Some(dec!(965)));
        assert_eq!(trend.change_percent, Some(dec!(2.66)));
        assert_eq!(trend.min_value, Some(dec!(925.5)));
        assert_eq!(trend.max_value, Some(dec!(965)));
        assert_eq!(trend.avg_value, Some(dec!(943.50)));
    }

    #[test]
    fn test_falling_and_stable_series() {
        let falling = SeriesTrend::analyze(&series(&[dec!(1000), dec!(970)]));
        assert_eq!(falling.trend, TrendDirection::Decreasing);
        assert_eq!(falling.change_percent, Some(dec!(-3.00)));

        // Exactly 2% is not a move.
        let stable = SeriesTrend::analyze(&series(&[dec!(37000), dec!(37740)]));
        assert_eq!(stable.trend, TrendDirection::Stable);
        assert_eq!(stable.change_percent, Some(dec!(2.00)));
    }

    #[test]
    fn test_order_follows_dates() {
        let mut obs = series(&[dec!(100), dec!(110)]);
        obs.reverse();

        let trend = SeriesTrend::analyze(&obs);

        assert_eq!(trend.first_value, Some(dec!(100)));
        assert_eq!(trend.change_percent, Some(dec!(10.00)));
    }

    #[test]
    fn test_too_few_values() {
        assert_eq!(
            SeriesTrend::analyze(&[]).trend,
            TrendDirection::InsufficientData
        );
        let single = SeriesTrend::analyze(&series(&[dec!(37500)]));
        assert_eq!(single.trend, TrendDirection::InsufficientData);
        assert!(single.change_percent.is_none());
        assert!(single.avg_value.is_none());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(SeriesTrend::analyze(&[])).unwrap();
        assert_eq!(json, serde_json::json!({ "trend": "insufficient_data" }));
    }
}
