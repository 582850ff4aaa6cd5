//! Error types raised by the number-formatting facility
//!
//! The registry never wraps these; whatever `NumberFormat::new` rejects reaches
//! the caller as-is.

use thiserror::Error;

/// Errors produced while constructing a [`crate::formatter::NumberFormat`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntlError {
    /// The locale tag is not well-formed BCP-47
    #[error("Incorrect locale information provided: '{0}'")]
    InvalidLocale(String),

    /// A numeric option is outside the range the facility accepts
    #[error("{option} value {value} is out of range (expected {min}..={max})")]
    OutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// minimumFractionDigits is greater than maximumFractionDigits
    #[error("minimumFractionDigits ({min}) is greater than maximumFractionDigits ({max})")]
    InvalidRange { min: u32, max: u32 },

    /// Currency style was requested without a currency code
    #[error("Currency code is required with currency style")]
    MissingCurrency,

    /// The currency code is not a three-letter ISO 4217 code
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),
}

impl IntlError {
    pub(crate) fn out_of_range(option: &'static str, value: u32, min: u32, max: u32) -> Self {
        Self::OutOfRange {
            option,
            value,
            min,
            max,
        }
    }
}

/// Errors raised while loading registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse registry configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, IntlError>;
