//! Registry configuration
//!
//! Settings can be written as TOML using the same option names as UI code:
//!
//! ```toml
//! locale = "de-DE"
//! digits = 0
//!
//! [options]
//! style = "percent"
//! ```
//!
//! Every key is optional; missing keys leave the registry field untouched.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::FormatOptions;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Locale override; an empty string means "fall back"
    pub locale: Option<String>,
    /// Digit precision applied as both minimum and maximum fraction digits
    pub digits: Option<u32>,
    /// Format options, excluding the fraction-digit options
    pub options: Option<FormatOptions>,
}

impl RegistryConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

impl FromStr for RegistryConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CurrencyDisplay, SignDisplay, Style, UseGrouping};

    #[test]
    fn test_full_config() {
        let config: RegistryConfig = r#"
            locale = "de-DE"
            digits = 0

            [options]
            style = "percent"
            signDisplay = "exceptZero"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.locale.as_deref(), Some("de-DE"));
        assert_eq!(config.digits, Some(0));
        let options = config.options.unwrap();
        assert_eq!(options.style, Style::Percent);
        assert_eq!(options.sign_display, SignDisplay::ExceptZero);
        assert_eq!(options.use_grouping, UseGrouping::Auto);
    }

    #[test]
    fn test_empty_config() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_currency_options() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [options]
            style = "currency"
            currency = "JPY"
            currencyDisplay = "narrowSymbol"
            "#,
        )
        .unwrap();
        let options = config.options.unwrap();
        assert_eq!(options.currency.as_deref(), Some("JPY"));
        assert_eq!(options.currency_display, CurrencyDisplay::NarrowSymbol);
    }

    #[test]
    fn test_grouping_forms() {
        for (value, expected) in [
            ("true", UseGrouping::Always),
            ("false", UseGrouping::False),
            ("\"min2\"", UseGrouping::Min2),
            ("\"auto\"", UseGrouping::Auto),
        ] {
            let config =
                RegistryConfig::from_toml_str(&format!("[options]\nuseGrouping = {value}")).unwrap();
            assert_eq!(config.options.unwrap().use_grouping, expected);
        }
    }

    #[test]
    fn test_fraction_digit_options_are_rejected() {
        let result = RegistryConfig::from_toml_str(
            r#"
            [options]
            maximumFractionDigits = 4
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        assert!(RegistryConfig::from_toml_str("precision = 3").is_err());
    }
}
