//! Shared locale-aware number formatting
//!
//! A [`FormatterRegistry`] holds a locale override, a digit precision and a set of
//! format options, and derives a [`NumberFormat`] from them on demand. UI code shares
//! one registry so every component formats numbers the same way.
//!
//! ```
//! use intl_registry::{FormatterRegistry, FormatOptions};
//!
//! let registry = FormatterRegistry::with_fallbacks(Some("en-US".to_string()), "en-US");
//! registry.set_digits(3);
//! assert_eq!(registry.format(1234.5).unwrap(), "1,234.500");
//!
//! registry.set_locale("de-DE");
//! registry.set_digits(0);
//! registry.set_options(FormatOptions::percent());
//! assert_eq!(registry.format(0.5).unwrap(), "50\u{a0}%");
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod registry;
pub mod types;

// Main API exports
pub use config::RegistryConfig;
pub use error::{ConfigError, IntlError};
pub use formatter::NumberFormat;
pub use registry::{
    DEFAULT_DIGITS, FormatterRegistry, HostLocaleProvider, NoHostLocale, StaticHostLocale,
    derive_formatter, get_or_init_registry,
};
pub use types::*;

#[cfg(test)]
mod tests;
