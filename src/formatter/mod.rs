//! Number formatting facility
//!
//! [`NumberFormat`] is constructed from a locale tag and an option record, validates
//! both, and then renders numbers as strings or as typed parts. Construction is the
//! only fallible step.

mod decimal;
mod exponential;
mod parts;

use tracing::trace;

use crate::error::{IntlError, Result};
use crate::locale::{LocaleData, currency_symbol, resolve_locale_data};
use crate::parser::parse_locale_tag;
use crate::types::{
    FormatOptions, LocaleTag, NumberFormatOptions, Part, ResolvedOptions, Style,
};

use self::parts::{PartsSpec, format_parts};

const MAX_FRACTION_DIGITS: u32 = 100;
const MAX_INTEGER_DIGITS: u32 = 21;

/// A configured, locale-aware number formatter
///
/// # Examples
/// ```
/// use intl_registry::formatter::NumberFormat;
/// use intl_registry::types::{FormatOptions, NumberFormatOptions};
///
/// let options = NumberFormatOptions::from(FormatOptions::default()).with_fraction_digits(2);
/// let nf = NumberFormat::new("de-DE", &options).unwrap();
/// assert_eq!(nf.format(1234.5), "1.234,50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    requested: LocaleTag,
    locale: String,
    data: LocaleData,
    options: FormatOptions,
    currency_symbol: Option<String>,
    minimum_fraction_digits: u32,
    maximum_fraction_digits: u32,
}

impl NumberFormat {
    /// Build a formatter, rejecting malformed tags and out-of-range options
    pub fn new(locale: &str, options: &NumberFormatOptions) -> Result<Self> {
        let requested = parse_locale_tag(locale)?;
        let (resolved, data) = resolve_locale_data(&requested);

        let mut format = options.format.clone();

        if !(1..=MAX_INTEGER_DIGITS).contains(&format.minimum_integer_digits) {
            return Err(IntlError::out_of_range(
                "minimumIntegerDigits",
                format.minimum_integer_digits,
                1,
                MAX_INTEGER_DIGITS,
            ));
        }

        let (minimum_fraction_digits, maximum_fraction_digits) = resolve_fraction_digits(
            format.style,
            options.minimum_fraction_digits,
            options.maximum_fraction_digits,
        )?;

        if let Some(code) = &format.currency {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(IntlError::InvalidCurrency(code.clone()));
            }
            format.currency = Some(code.to_ascii_uppercase());
        }

        let currency_symbol = match (format.style, &format.currency) {
            (Style::Currency, None) => return Err(IntlError::MissingCurrency),
            (Style::Currency, Some(code)) => {
                Some(currency_symbol(code, format.currency_display, &requested))
            }
            _ => None,
        };

        trace!(
            requested = %requested,
            resolved = %resolved,
            min_fraction = minimum_fraction_digits,
            max_fraction = maximum_fraction_digits,
            "constructed number format"
        );

        Ok(Self {
            requested,
            locale: resolved,
            data,
            options: format,
            currency_symbol,
            minimum_fraction_digits,
            maximum_fraction_digits,
        })
    }

    /// Format a number as a string
    pub fn format(&self, value: f64) -> String {
        self.format_to_parts(value)
            .into_iter()
            .map(|part| part.value)
            .collect()
    }

    /// Format a number as a sequence of typed parts
    pub fn format_to_parts(&self, value: f64) -> Vec<Part> {
        format_parts(value, &self.parts_spec())
    }

    /// The locale tag this formatter was constructed with, in canonical form
    pub fn requested_locale(&self) -> String {
        self.requested.to_string()
    }

    pub fn resolved_options(&self) -> ResolvedOptions {
        let is_currency = self.options.style == Style::Currency;
        ResolvedOptions {
            locale: self.locale.clone(),
            numbering_system: "latn",
            style: self.options.style,
            currency: self.options.currency.clone().filter(|_| is_currency),
            currency_display: is_currency.then_some(self.options.currency_display),
            use_grouping: self.options.use_grouping,
            minimum_integer_digits: self.options.minimum_integer_digits,
            minimum_fraction_digits: self.minimum_fraction_digits,
            maximum_fraction_digits: self.maximum_fraction_digits,
            sign_display: self.options.sign_display,
            notation: self.options.notation,
        }
    }

    fn parts_spec(&self) -> PartsSpec<'_> {
        PartsSpec {
            data: &self.data,
            style: self.options.style,
            currency_symbol: self.currency_symbol.as_deref(),
            use_grouping: self.options.use_grouping,
            minimum_integer_digits: self.options.minimum_integer_digits,
            minimum_fraction_digits: self.minimum_fraction_digits,
            maximum_fraction_digits: self.maximum_fraction_digits,
            sign_display: self.options.sign_display,
            notation: self.options.notation,
        }
    }
}

fn resolve_fraction_digits(
    style: Style,
    minimum: Option<u32>,
    maximum: Option<u32>,
) -> Result<(u32, u32)> {
    for (option, value) in [
        ("minimumFractionDigits", minimum),
        ("maximumFractionDigits", maximum),
    ] {
        if let Some(value) = value {
            if value > MAX_FRACTION_DIGITS {
                return Err(IntlError::out_of_range(option, value, 0, MAX_FRACTION_DIGITS));
            }
        }
    }

    let (default_min, default_max) = match style {
        Style::Decimal => (0, 3),
        Style::Percent => (0, 0),
        Style::Currency => (2, 2),
    };

    match (minimum, maximum) {
        (Some(min), Some(max)) if min > max => Err(IntlError::InvalidRange { min, max }),
        (Some(min), Some(max)) => Ok((min, max)),
        (Some(min), None) => Ok((min, default_max.max(min))),
        (None, Some(max)) => Ok((default_min.min(max), max)),
        (None, None) => Ok((default_min, default_max)),
    }
}
