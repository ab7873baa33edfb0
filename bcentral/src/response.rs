//! Decoding of the `GetSeries` JSON envelope.
//!
//! ```json
//! {"Codigo":0,"Descripcion":"Success",
//!  "Series":{"seriesId":"F073.TCO.PRE.Z.D",
//!            "Obs":[{"indexDateString":"03-06-2024","value":"950.12","statusCode":"OK"}]}}
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use cowtracker_types::SeriesObservation;
use exchange_rates::RateSourceError;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    codigo: i64,
    #[serde(default)]
    descripcion: String,
    #[serde(default)]
    series: Option<SeriesBody>,
}

#[derive(Debug, Deserialize)]
struct SeriesBody {
    #[serde(rename = "Obs", default)]
    obs: Option<Vec<RawObs>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawObs {
    index_date_string: String,
    value: String,
    #[serde(default)]
    status_code: String,
}

impl RawObs {
    fn parse(&self, series_id: &str) -> Option<SeriesObservation> {
        if !self.status_code.eq_ignore_ascii_case("OK") {
            return None;
        }
        let date = NaiveDate::parse_from_str(self.index_date_string.trim(), DATE_FORMAT).ok()?;
        let value = Decimal::from_str(self.value.trim()).ok()?;
        Some(SeriesObservation {
            series_id: series_id.to_string(),
            date,
            value,
        })
    }
}

/// Decodes a response body into the observations of `series_id`, oldest first.
///
/// Observations without an `OK` status or with an unparsable value are skipped.
pub fn decode(series_id: &str, body: &str) -> Result<Vec<SeriesObservation>, RateSourceError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| RateSourceError::Decode(e.to_string()))?;

    if envelope.codigo != 0 {
        return Err(RateSourceError::Upstream {
            code: envelope.codigo,
            message: envelope.descripcion,
        });
    }

    let raw = envelope
        .series
        .and_then(|s| s.obs)
        .unwrap_or_default();
    let total = raw.len();

    let mut observations: Vec<_> = raw.iter().filter_map(|o| o.parse(series_id)).collect();
    observations.sort_by_key(|o| o.date);

    if observations.len() < total {
        debug!(
            series_id,
            skipped = total - observations.len(),
            "Skipped unusable observations"
        );
    }
    Ok(observations)
}

/// The latest observation dated on or before `date`.
pub fn latest_on_or_before(
    observations: &[SeriesObservation],
    date: NaiveDate,
) -> Option<&SeriesObservation> {
    observations
        .iter()
        .filter(|o| o.date <= date)
        .max_by_key(|o| o.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const USD: &str = "F073.TCO.PRE.Z.D";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_decode_observations() {
        let body = r#"{
            "Codigo": 0,
            "Descripcion": "Success",
            "Series": {
                "descripEsp": "Tipo de cambio",
                "seriesId": "F073.TCO.PRE.Z.D",
                "Obs": [
                    {"indexDateString": "04-06-2024", "value": "951.30", "statusCode": "OK"},
                    {"indexDateString": "03-06-2024", "value": "950.12", "statusCode": "OK"}
                ]
            },
            "SeriesInfos": []
        }"#;

        let obs = decode(USD, body).unwrap();

        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].date, day(3));
        assert_eq!(obs[0].value, dec!(950.12));
        assert_eq!(obs[1].series_id, USD);
    }

    #[test]
    fn test_decode_skips_unusable_rows() {
        let body = r#"{"Codigo":0,"Descripcion":"Success","Series":{"Obs":[
            {"indexDateString":"01-06-2024","value":"NaN","statusCode":"ND"},
            {"indexDateString":"02-06-2024","value":"abc","statusCode":"OK"},
            {"indexDateString":"2024-06-03","value":"950","statusCode":"OK"},
            {"indexDateString":"04-06-2024","value":"952.5","statusCode":"OK"}
        ]}}"#;

        let obs = decode(USD, body).unwrap();

        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].date, day(4));
    }

    #[test]
    fn test_decode_empty_series() {
        let body = r#"{"Codigo":0,"Descripcion":"Success","Series":{"Obs":null}}"#;
        assert!(decode(USD, body).unwrap().is_empty());
    }

    #[test]
    fn test_decode_upstream_error() {
        let body = r#"{"Codigo":-5,"Descripcion":"Invalid username or password","Series":null}"#;

        let err = decode(USD, body).unwrap_err();

        assert!(matches!(err, RateSourceError::Upstream { code: -5, .. }));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode(USD, "<html>oops</html>"),
            Err(RateSourceError::Decode(_))
        ));
    }

    #[test]
    fn test_latest_on_or_before() {
        let obs: Vec<_> = [(3, dec!(950)), (4, dec!(951)), (7, dec!(955))]
            .into_iter()
            .map(|(d, value)| SeriesObservation {
                series_id: USD.into(),
                date: day(d),
                value,
            })
            .collect();

        assert_eq!(latest_on_or_before(&obs, day(6)).unwrap().value, dec!(951));
        assert_eq!(latest_on_or_before(&obs, day(7)).unwrap().value, dec!(955));
        assert!(latest_on_or_before(&obs, day(2)).is_none());
    }
}
