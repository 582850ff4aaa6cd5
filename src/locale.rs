//! Locale support for number formatting
//!
//! This module loads the embedded locale tables and resolves a parsed locale tag
//! to the symbols and affix patterns the formatter needs.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{trace, warn};

use crate::parser::parse_affix_pattern;
use crate::types::{AffixPattern, CurrencyDisplay, LocaleSettings, LocaleTag};

/// Locale used when no data matches the requested tag
pub const DEFAULT_LOCALE: &str = "en-US";

type Result<T> = std::result::Result<T, String>;

/// Settings for one locale with its affix patterns already parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleData {
    pub settings: LocaleSettings,
    pub percent_pattern: AffixPattern,
    pub currency_pattern: AffixPattern,
}

impl LocaleData {
    fn from_settings(settings: LocaleSettings) -> Result<Self> {
        let percent_pattern = parse_affix_pattern(&settings.percent_pattern)?;
        let currency_pattern = parse_affix_pattern(&settings.currency_pattern)?;
        Ok(Self {
            settings,
            percent_pattern,
            currency_pattern,
        })
    }
}

impl Default for LocaleData {
    fn default() -> Self {
        let settings = LocaleSettings::default();
        Self::from_settings(settings.clone()).unwrap_or(Self {
            settings,
            percent_pattern: AffixPattern::default(),
            currency_pattern: AffixPattern::default(),
        })
    }
}

#[derive(Debug, Clone)]
struct CurrencySymbols {
    symbol: String,
    narrow: String,
    /// Symbol used instead of `symbol` in a locale and its descendants
    locales: HashMap<String, String>,
}

/// Read-only store of the embedded locale and currency tables
struct LocaleManager {
    locales: HashMap<String, LocaleData>,
    currencies: HashMap<String, CurrencySymbols>,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            locales: HashMap::new(),
            currencies: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            // Formatting still works from the built-in defaults
            warn!(error = %e, "failed to load embedded locale data");
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)?;

        let currencies_toml = include_str!("locale/currencies.toml");
        self.parse_currencies(currencies_toml)?;

        trace!(
            locales = self.locales.len(),
            currencies = self.currencies.len(),
            "loaded embedded locale data"
        );
        Ok(())
    }

    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        let table = parsed_toml
            .as_table()
            .ok_or_else(|| "Root is not a table".to_string())?;

        let base = match table.get("base") {
            Some(toml::Value::Table(base)) => base.clone(),
            Some(_) => return Err("base is not a table".to_string()),
            None => toml::value::Table::new(),
        };

        for locale_id in table.keys().filter(|k| k.as_str() != "base") {
            let mut merged = base.clone();

            // Ancestors first so that the most specific table wins
            let subtags: Vec<&str> = locale_id.split('-').collect();
            for n in 1..=subtags.len() {
                let ancestor = subtags[..n].join("-");
                match table.get(&ancestor) {
                    Some(toml::Value::Table(overrides)) => {
                        for (key, value) in overrides {
                            merged.insert(key.clone(), value.clone());
                        }
                    }
                    Some(_) => return Err(format!("{ancestor} is not a table")),
                    None => {}
                }
            }

            let settings: LocaleSettings = toml::Value::Table(merged)
                .try_into()
                .map_err(|e| format!("Invalid settings for {locale_id}: {e}"))?;
            let data = LocaleData::from_settings(settings)
                .map_err(|e| format!("Invalid pattern for {locale_id}: {e}"))?;
            self.locales.insert(locale_id.clone(), data);
        }

        Ok(())
    }

    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        let table = parsed_toml
            .as_table()
            .ok_or_else(|| "Root is not a table".to_string())?;

        for (code, value) in table {
            let symbol = value
                .get("symbol")
                .and_then(|v| v.as_str())
                .ok_or_else(|| format!("Missing or invalid symbol for {code}"))?;
            let narrow = value
                .get("narrow")
                .and_then(|v| v.as_str())
                .unwrap_or(symbol);

            let mut locales = HashMap::new();
            if let Some(overrides) = value.get("locales") {
                let overrides = overrides
                    .as_table()
                    .ok_or_else(|| format!("locales for {code} is not a table"))?;
                for (locale_id, local_symbol) in overrides {
                    let local_symbol = local_symbol
                        .as_str()
                        .ok_or_else(|| format!("Invalid {locale_id} symbol for {code}"))?;
                    locales.insert(locale_id.clone(), local_symbol.to_string());
                }
            }

            self.currencies.insert(
                code.clone(),
                CurrencySymbols {
                    symbol: symbol.to_string(),
                    narrow: narrow.to_string(),
                    locales,
                },
            );
        }

        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Get locale data by canonical locale identifier (e.g., "en-US", "zh-Hant-TW")
pub fn get_locale_data(locale_id: &str) -> Option<LocaleData> {
    LocaleManager::get().locales.get(locale_id).cloned()
}

/// Get locale settings by canonical locale identifier
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    get_locale_data(locale_id).map(|data| data.settings)
}

/// Resolve a tag to the best-matching locale data
///
/// Returns the identifier of the table that matched together with its data. When
/// nothing matches, the [`DEFAULT_LOCALE`] table (or the built-in defaults) is used.
pub fn resolve_locale_data(tag: &LocaleTag) -> (String, LocaleData) {
    let manager = LocaleManager::get();
    for key in tag.lookup_keys() {
        if let Some(data) = manager.locales.get(&key) {
            return (key, data.clone());
        }
    }

    trace!(requested = %tag, fallback = DEFAULT_LOCALE, "no locale data for tag");
    let data = manager
        .locales
        .get(DEFAULT_LOCALE)
        .cloned()
        .unwrap_or_default();
    (DEFAULT_LOCALE.to_string(), data)
}

/// Symbol shown for a currency code in the locale `tag`
///
/// The symbol display honors per-locale entries (JPY is "￥" in `ja`), searched
/// from the most specific lookup key down to the language. Narrow symbols are the
/// same in every locale. Unknown codes display as the code itself.
pub fn currency_symbol(code: &str, display: CurrencyDisplay, tag: &LocaleTag) -> String {
    let symbols = LocaleManager::get().currencies.get(code);
    match (display, symbols) {
        (CurrencyDisplay::Code, _) | (_, None) => code.to_string(),
        (CurrencyDisplay::Symbol, Some(s)) => tag
            .lookup_keys()
            .iter()
            .find_map(|key| s.locales.get(key))
            .unwrap_or(&s.symbol)
            .clone(),
        (CurrencyDisplay::NarrowSymbol, Some(s)) => s.narrow.clone(),
    }
}

/// List all available locale identifiers, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get().locales.keys().cloned().collect();
    locales.sort();
    locales
}
