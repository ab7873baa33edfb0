//! Currency catalogue.
//!
//! Every currency the service knows about is declared once in the
//! `define_currencies!` invocation at the bottom of this file. The macro
//! generates the `CurrencyCode` enum together with its static metadata
//! (display name, symbol, kind and display precision).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Currency Kind
// ─────────────────────────────────────────────────────────────────────────────

/// How a currency relates to the local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyKind {
    /// The currency every rate observation is denominated in.
    Local,
    /// A freely floating foreign currency.
    Foreign,
    /// A unit whose value is periodically adjusted by an external index.
    Indexed,
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines CurrencyCode and its metadata table
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currency catalogue.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "Display name", "SYMBOL", Kind, display_decimals),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $display:literal, $symbol:literal, $kind:ident, $decimals:expr)
        ),* $(,)?
    ) => {
        /// Recognised currency codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn kind(&self) -> $crate::CurrencyKind {
                match self {
                    $(CurrencyCode::$name => $crate::CurrencyKind::$kind),*
                }
            }

            /// Number of decimals used when rendering an amount for humans.
            pub fn display_decimals(&self) -> u32 {
                match self {
                    $(CurrencyCode::$name => $decimals),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::ConversionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::ConversionError::UnsupportedCurrency(s.to_string())),
                }
            }
        }
    };
}

impl CurrencyCode {
    /// The currency all observations are quoted against.
    pub const LOCAL: CurrencyCode = CurrencyCode::CLP;

    pub fn is_local(&self) -> bool {
        self.kind() == CurrencyKind::Local
    }

    pub fn is_indexed(&self) -> bool {
        self.kind() == CurrencyKind::Indexed
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    CLP => ("CLP", "Chilean Peso", "$", Local, 0),
    USD => ("USD", "US Dollar", "US$", Foreign, 2),
    EUR => ("EUR", "Euro", "€", Foreign, 2),
    GBP => ("GBP", "Pound Sterling", "£", Foreign, 2),
    JPY => ("JPY", "Japanese Yen", "¥", Foreign, 0),
    CNY => ("CNY", "Chinese Yuan", "CN¥", Foreign, 2),
    BRL => ("BRL", "Brazilian Real", "R$", Foreign, 2),
    ARS => ("ARS", "Argentine Peso", "AR$", Foreign, 2),
    PEN => ("PEN", "Peruvian Sol", "S/", Foreign, 2),
    UF => ("UF", "Unidad de Fomento", "UF", Indexed, 2),
    UTM => ("UTM", "Unidad Tributaria Mensual", "UTM", Indexed, 2),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionError;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" uf ".parse::<CurrencyCode>().unwrap(), CurrencyCode::UF);
    }

    #[test]
    fn test_unknown_code_is_unsupported() {
        let err = "XXX".parse::<CurrencyCode>().unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedCurrency(code) if code == "XXX"));
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::USD.to_string(), "USD");
        assert_eq!(CurrencyCode::UTM.to_string(), "UTM");
    }

    #[test]
    fn test_exactly_one_local_currency() {
        let locals: Vec<_> = CurrencyCode::all()
            .iter()
            .filter(|c| c.is_local())
            .collect();
        assert_eq!(locals, vec![&CurrencyCode::LOCAL]);
    }

    #[test]
    fn test_indexed_units() {
        let indexed: Vec<_> = CurrencyCode::all()
            .iter()
            .copied()
            .filter(CurrencyCode::is_indexed)
            .collect();
        assert_eq!(indexed, vec![CurrencyCode::UF, CurrencyCode::UTM]);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(CurrencyCode::CLP.symbol(), "$");
        assert_eq!(CurrencyCode::USD.symbol(), "US$");
        assert_eq!(CurrencyCode::UF.name(), "Unidad de Fomento");
        assert_eq!(CurrencyCode::CLP.display_decimals(), 0);
    }
}
