//! Language, currency and request option codes.
//!
//! The provider identifies languages and currencies by short upper-case
//! codes, and locales by `<language>_<COUNTRY>` strings. [`locale`] is the
//! single place locale strings are derived from a [`Language`].

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the code sent on the wire.
            #[must_use]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($code) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(ConfigError::UnknownCode {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }
    };
}

wire_enum! {
    /// Response language for product titles and descriptions.
    Language {
        /// English
        En => "EN",
        /// Russian
        Ru => "RU",
        /// Portuguese
        Pt => "PT",
        /// Spanish
        Es => "ES",
        /// French
        Fr => "FR",
        /// Indonesian
        Id => "ID",
        /// Italian
        It => "IT",
        /// Thai
        Th => "TH",
        /// Japanese
        Ja => "JA",
        /// Arabic
        Ar => "AR",
        /// Vietnamese
        Vi => "VI",
        /// Turkish
        Tr => "TR",
        /// German
        De => "DE",
        /// Hebrew
        He => "HE",
        /// Korean
        Ko => "KO",
        /// Dutch
        Nl => "NL",
        /// Polish
        Pl => "PL",
        /// Mexican Spanish
        Mx => "MX",
        /// Chilean Spanish
        Cl => "CL",
        /// Hebrew (legacy code)
        Iw => "IW",
        /// Indonesian (legacy code)
        In => "IN",
    }
}

wire_enum! {
    /// Target currency for prices in responses.
    Currency {
        /// US dollar
        Usd => "USD",
        /// Pound sterling
        Gbp => "GBP",
        /// Canadian dollar
        Cad => "CAD",
        /// Euro
        Eur => "EUR",
        /// Ukrainian hryvnia
        Uah => "UAH",
        /// Mexican peso
        Mxn => "MXN",
        /// Turkish lira
        Try => "TRY",
        /// Russian ruble
        Rub => "RUB",
        /// Brazilian real
        Brl => "BRL",
        /// Australian dollar
        Aud => "AUD",
        /// Indian rupee
        Inr => "INR",
        /// Japanese yen
        Jpy => "JPY",
        /// Indonesian rupiah
        Idr => "IDR",
        /// Swedish krona
        Sek => "SEK",
        /// South Korean won
        Krw => "KRW",
    }
}

wire_enum! {
    /// Kind of affiliate link to generate.
    LinkType {
        /// Regular promotion link.
        Normal => "0",
        /// Hot link with higher commission.
        HotLink => "2",
    }
}

wire_enum! {
    /// Platform product type filter for product searches.
    ProductType {
        /// All products.
        All => "ALL",
        /// Plaza products.
        Plaza => "PLAZA",
        /// Tmall products.
        Tmall => "TMALL",
    }
}

wire_enum! {
    /// Sort order for affiliate product searches.
    SortBy {
        /// Sale price, ascending.
        SalePriceAsc => "SALE_PRICE_ASC",
        /// Sale price, descending.
        SalePriceDesc => "SALE_PRICE_DESC",
        /// Sales volume, ascending.
        LastVolumeAsc => "LAST_VOLUME_ASC",
        /// Sales volume, descending.
        LastVolumeDesc => "LAST_VOLUME_DESC",
    }
}

/// Country used when a locale is requested without one.
pub const DEFAULT_LOCALE_COUNTRY: &str = "US";

/// Builds a provider locale string such as `en_US` or `fr_FR`.
///
/// The language code is lower-cased and the country code upper-cased;
/// without a country (or with a blank one) the locale falls back to
/// [`DEFAULT_LOCALE_COUNTRY`].
///
/// # Example
///
/// ```rust
/// use aliexpress_api::config::{locale, Language};
///
/// assert_eq!(locale(Language::En, None), "en_US");
/// assert_eq!(locale(Language::Fr, Some("fr")), "fr_FR");
/// ```
#[must_use]
pub fn locale(language: Language, country_code: Option<&str>) -> String {
    let country = country_code
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_LOCALE_COUNTRY);
    format!(
        "{}_{}",
        language.code().to_ascii_lowercase(),
        country.to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults_country_to_us() {
        assert_eq!(locale(Language::En, None), "en_US");
        assert_eq!(locale(Language::Es, Some("  ")), "es_US");
    }

    #[test]
    fn test_locale_normalizes_case() {
        assert_eq!(locale(Language::Pt, Some("br")), "pt_BR");
        assert_eq!(locale(Language::De, Some("De")), "de_DE");
    }

    #[test]
    fn test_language_display_and_parse() {
        assert_eq!(Language::Fr.to_string(), "FR");
        assert_eq!("fr".parse::<Language>().unwrap(), Language::Fr);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn test_request_option_codes() {
        assert_eq!(LinkType::HotLink.code(), "2");
        assert_eq!(ProductType::Plaza.to_string(), "PLAZA");
        assert_eq!(SortBy::LastVolumeDesc.code(), "LAST_VOLUME_DESC");
    }
}
