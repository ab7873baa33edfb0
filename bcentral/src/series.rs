//! Series codes known to the adapter.

use chrono::{Duration, NaiveDate};
use cowtracker_types::SeriesInfo;
use exchange_rates::CurrencyCode;

pub const USD_SERIES: &str = "F073.TCO.PRE.Z.D";
pub const UF_SERIES: &str = "F073.UF.PRE.Z.D";
pub const UTM_SERIES: &str = "F073.UTM.PRE.Z.M";

/// Publication frequency of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Monthly,
}

impl Frequency {
    /// Series codes end in `.D` (daily) or `.M` (monthly).
    pub fn of(code: &str) -> Self {
        if code.ends_with(".M") {
            Frequency::Monthly
        } else {
            Frequency::Daily
        }
    }

    /// How far back to search for the latest value before a date.
    ///
    /// Daily series skip weekends and holidays; monthly ones publish once
    /// per month.
    pub fn lookback(&self) -> Duration {
        match self {
            Frequency::Daily => Duration::days(14),
            Frequency::Monthly => Duration::days(62),
        }
    }

    /// First day of the lookup window ending at `date`.
    pub fn window_start(&self, date: NaiveDate) -> NaiveDate {
        date.checked_sub_signed(self.lookback())
            .unwrap_or(NaiveDate::MIN)
    }
}

/// The series quoting one unit of `currency` in pesos.
pub fn series_for(currency: CurrencyCode) -> Option<&'static str> {
    match currency {
        CurrencyCode::CLP => None,
        CurrencyCode::USD => Some(USD_SERIES),
        CurrencyCode::EUR => Some("F072.CLP.EUR.N.O.D"),
        CurrencyCode::GBP => Some("F072.CLP.GBP.N.O.D"),
        CurrencyCode::JPY => Some("F072.CLP.JPY.N.O.D"),
        CurrencyCode::CNY => Some("F072.CLP.CNY.N.O.D"),
        CurrencyCode::BRL => Some("F072.CLP.BRL.N.O.D"),
        CurrencyCode::ARS => Some("F072.CLP.ARS.N.O.D"),
        CurrencyCode::PEN => Some("F072.CLP.PEN.N.O.D"),
        CurrencyCode::UF => Some(UF_SERIES),
        CurrencyCode::UTM => Some(UTM_SERIES),
    }
}

/// Commonly queried series.
pub fn catalogue() -> Vec<SeriesInfo> {
    vec![
        SeriesInfo::new(USD_SERIES, "Tipo de cambio USD/CLP"),
        SeriesInfo::new(UF_SERIES, "Unidad de Fomento (UF)"),
        SeriesInfo::new(UTM_SERIES, "Unidad Tributaria Mensual (UTM)"),
        SeriesInfo::new(
            "F072.IPC.PRE.Z.M",
            "Índice de Precios al Consumidor (IPC)",
        ),
        SeriesInfo::new("F032.IPM.FRU.Z.M", "Índice de Producción Manufacturera"),
        SeriesInfo::new("F031.INE.DESE.Z.M", "Tasa de Desempleo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_foreign_currency_has_a_series() {
        for currency in CurrencyCode::all() {
            assert_eq!(series_for(*currency).is_none(), currency.is_local());
        }
    }

    #[test]
    fn test_frequency_from_code() {
        assert_eq!(Frequency::of(USD_SERIES), Frequency::Daily);
        assert_eq!(Frequency::of(UTM_SERIES), Frequency::Monthly);
    }

    #[test]
    fn test_window_start() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            Frequency::Daily.window_start(date),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            Frequency::Monthly.window_start(date),
            NaiveDate::from_ymd_opt(2024, 4, 14).unwrap()
        );
    }

    #[test]
    fn test_catalogue_lists_six_series() {
        let codes: Vec<_> = catalogue().into_iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), 6);
        assert!(codes.contains(&"F031.INE.DESE.Z.M".to_string()));
    }
}
