//! Human-readable rendering of conversion results.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{ConversionResult, CurrencyCode};

/// Renders `amount` with `,` thousands separators and the currency's display decimals.
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let decimals = currency.display_decimals();
    let mut rounded =
        amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);

    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Pairs the original and converted amounts, e.g. `$1,500,000 / 1,578.95 US$`.
///
/// The original amount carries its symbol as a prefix, the converted amount
/// as a suffix. Only the text is affected; the result is not modified.
pub fn format_conversion(result: &ConversionResult) -> String {
    format!(
        "{}{} / {} {}",
        result.from.symbol(),
        format_amount(result.amount, result.from),
        format_amount(result.converted_amount, result.to),
        result.to.symbol()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RateProvenance;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn result(
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
        converted: Decimal,
    ) -> ConversionResult {
        ConversionResult {
            amount,
            from,
            to,
            converted_amount: converted,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            rate: dec!(950),
            intermediate_local_amount: None,
            rate_date: None,
            source: RateProvenance::Primary,
        }
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1500000), CurrencyCode::CLP), "1,500,000");
        assert_eq!(format_amount(dec!(1578.95), CurrencyCode::USD), "1,578.95");
        assert_eq!(format_amount(dec!(999), CurrencyCode::USD), "999.00");
        assert_eq!(format_amount(dec!(0.5), CurrencyCode::CLP), "1");
        assert_eq!(format_amount(dec!(-1234.5), CurrencyCode::EUR), "-1,234.50");
    }

    #[test]
    fn test_format_local_to_foreign() {
        let r = result(dec!(1500000), CurrencyCode::CLP, CurrencyCode::USD, dec!(1578.95));
        assert_eq!(format_conversion(&r), "$1,500,000 / 1,578.95 US$");
    }

    #[test]
    fn test_format_foreign_to_local() {
        let r = result(dec!(1578.95), CurrencyCode::USD, CurrencyCode::CLP, dec!(1500002.50));
        assert_eq!(format_conversion(&r), "US$1,578.95 / 1,500,003 $");
    }

    #[test]
    fn test_format_does_not_touch_result() {
        let r = result(dec!(1500000), CurrencyCode::CLP, CurrencyCode::USD, dec!(1578.947));
        let before = r.clone();
        let _ = format_conversion(&r);
        assert_eq!(r, before);
    }
}
