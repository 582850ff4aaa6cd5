//! Type definitions shared by the parser, the formatter and the registry
//!
//! Option enums mirror the names of a browser-style number-format options record so
//! that settings can be written in JSON or TOML with the same keys UI code uses.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// Plain number
    #[default]
    Decimal,
    /// Value multiplied by 100 and shown with the locale's percent sign
    Percent,
    /// Monetary amount; requires a currency code
    Currency,
}

/// How the currency is shown in currency style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    /// Localized symbol such as "€"
    #[default]
    Symbol,
    /// Narrow symbol such as "$" for every dollar currency
    NarrowSymbol,
    /// ISO code such as "EUR"
    Code,
}

/// When to show the sign of the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignDisplay {
    /// Negative numbers only, including negative zero
    #[default]
    Auto,
    /// Always, including zero
    Always,
    /// Positive and negative numbers, but not zero
    ExceptZero,
    /// Negative numbers only, excluding negative zero
    Negative,
    /// Never
    Never,
}

/// Number notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    #[default]
    Standard,
    /// One integer digit and a power-of-ten exponent
    Scientific,
    /// Exponent is always a multiple of three
    Engineering,
}

/// When group separators are shown
///
/// Accepts the string names as well as `true` (same as `always`) and `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UseGrouping {
    /// Locale's minimum grouping digits decide
    #[default]
    Auto,
    /// Whenever the integer part is longer than one group
    Always,
    /// Only with at least two digits before the first separator
    Min2,
    /// Never
    False,
}

impl UseGrouping {
    pub fn as_str(self) -> &'static str {
        match self {
            UseGrouping::Auto => "auto",
            UseGrouping::Always => "always",
            UseGrouping::Min2 => "min2",
            UseGrouping::False => "false",
        }
    }
}

impl From<bool> for UseGrouping {
    fn from(value: bool) -> Self {
        if value {
            UseGrouping::Always
        } else {
            UseGrouping::False
        }
    }
}

impl Serialize for UseGrouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UseGrouping::False => serializer.serialize_bool(false),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for UseGrouping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UseGroupingVisitor;

        impl Visitor<'_> for UseGroupingVisitor {
            type Value = UseGrouping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or one of \"auto\", \"always\", \"min2\"")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<UseGrouping, E> {
                Ok(UseGrouping::from(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<UseGrouping, E> {
                match value {
                    "auto" => Ok(UseGrouping::Auto),
                    "always" | "true" => Ok(UseGrouping::Always),
                    "min2" => Ok(UseGrouping::Min2),
                    "false" => Ok(UseGrouping::False),
                    _ => Err(E::unknown_variant(value, &["auto", "always", "min2"])),
                }
            }
        }

        deserializer.deserialize_any(UseGroupingVisitor)
    }
}

/// Number-format options owned by the registry's options field
///
/// The fraction-digit options are deliberately absent: digit precision owns them,
/// and a configuration that names them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    pub style: Style,
    pub currency: Option<String>,
    pub currency_display: CurrencyDisplay,
    pub use_grouping: UseGrouping,
    pub minimum_integer_digits: u32,
    pub sign_display: SignDisplay,
    pub notation: Notation,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: Style::Decimal,
            currency: None,
            currency_display: CurrencyDisplay::Symbol,
            use_grouping: UseGrouping::Auto,
            minimum_integer_digits: 1,
            sign_display: SignDisplay::Auto,
            notation: Notation::Standard,
        }
    }
}

impl FormatOptions {
    pub fn percent() -> Self {
        Self {
            style: Style::Percent,
            ..Self::default()
        }
    }

    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            style: Style::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }

    pub fn with_grouping(mut self, use_grouping: impl Into<UseGrouping>) -> Self {
        self.use_grouping = use_grouping.into();
        self
    }

    pub fn with_minimum_integer_digits(mut self, digits: u32) -> Self {
        self.minimum_integer_digits = digits;
        self
    }

    pub fn with_sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = sign_display;
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }
}

/// Complete option record accepted by the formatting facility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumberFormatOptions {
    pub format: FormatOptions,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
}

impl NumberFormatOptions {
    /// Pin both fraction-digit bounds to the same value
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self.maximum_fraction_digits = Some(digits);
        self
    }
}

impl From<FormatOptions> for NumberFormatOptions {
    fn from(format: FormatOptions) -> Self {
        Self {
            format,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
        }
    }
}

/// Options a formatter actually ended up using
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub locale: String,
    pub numbering_system: &'static str,
    pub style: Style,
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub use_grouping: UseGrouping,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
    pub sign_display: SignDisplay,
    pub notation: Notation,
}

/// Kind of a formatted part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    MinusSign,
    PlusSign,
    Integer,
    Group,
    Decimal,
    Fraction,
    PercentSign,
    Currency,
    Literal,
    ExponentSeparator,
    ExponentMinusSign,
    ExponentInteger,
    Nan,
    Infinity,
}

/// A piece of formatted output, as returned by `format_to_parts`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub kind: PartKind,
    pub value: String,
}

impl Part {
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A token of a locale-data affix pattern such as `"#\u{a0}%"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AffixToken {
    /// Where the number goes (#)
    Number,
    /// Percent sign placeholder (%)
    Percent,
    /// Currency symbol placeholder (¤)
    Currency,
    /// Literal text, quoted or not
    Literal(String),
}

/// Affix pattern split around the number placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AffixPattern {
    pub prefix: Vec<AffixToken>,
    pub suffix: Vec<AffixToken>,
}

/// A well-formed BCP-47 language tag in canonical casing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
    pub variants: Vec<String>,
    /// Extension sequences, each starting with its singleton, e.g. "u-nu-latn"
    pub extensions: Vec<String>,
    /// Private-use sequence without the leading "x-"
    pub private_use: Option<String>,
}

impl LocaleTag {
    /// Keys tried against locale data, most specific first
    pub fn lookup_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(4);
        if let (Some(script), Some(region)) = (&self.script, &self.region) {
            keys.push(format!("{}-{}-{}", self.language, script, region));
        }
        if let Some(region) = &self.region {
            keys.push(format!("{}-{}", self.language, region));
        }
        if let Some(script) = &self.script {
            keys.push(format!("{}-{}", self.language, script));
        }
        keys.push(self.language.clone());
        keys
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        for extension in &self.extensions {
            write!(f, "-{extension}")?;
        }
        if let Some(private_use) = &self.private_use {
            write!(f, "-x-{private_use}")?;
        }
        Ok(())
    }
}

/// Symbols and patterns for one locale
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub decimal: String,
    pub group: String,
    pub minus: String,
    pub plus: String,
    pub percent_sign: String,
    pub percent_pattern: String,
    pub currency_pattern: String,
    pub primary_grouping: u8,
    pub secondary_grouping: u8,
    pub min_grouping_digits: u8,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            group: ",".to_string(),
            minus: "-".to_string(),
            plus: "+".to_string(),
            percent_sign: "%".to_string(),
            percent_pattern: "#%".to_string(),
            currency_pattern: "¤#".to_string(),
            primary_grouping: 3,
            secondary_grouping: 3,
            min_grouping_digits: 1,
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = decimal.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_grouping(mut self, primary: u8, secondary: u8, min_grouping_digits: u8) -> Self {
        self.primary_grouping = primary;
        self.secondary_grouping = secondary;
        self.min_grouping_digits = min_grouping_digits;
        self
    }
}
