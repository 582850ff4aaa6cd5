//! Execution-environment default locale
//!
//! The last-resort fallback when neither an explicit override nor a host locale is
//! available. The OS reports names in several shapes (`en-US`, `en_US.UTF-8`,
//! `de_DE@euro`, `C`), so they are normalized to BCP-47 before use.

use tracing::debug;

use crate::locale::DEFAULT_LOCALE;
use crate::parser::parse_locale_tag;

/// Normalize an OS locale name to a canonical BCP-47 tag
///
/// Returns `None` for the POSIX placeholder locales and for names that do not
/// describe a language.
///
/// # Examples
/// ```
/// use intl_registry::env::normalize_locale_name;
///
/// assert_eq!(normalize_locale_name("de_DE.UTF-8@euro").as_deref(), Some("de-DE"));
/// assert_eq!(normalize_locale_name("C"), None);
/// ```
pub fn normalize_locale_name(name: &str) -> Option<String> {
    let name = name.split('@').next().unwrap_or_default();
    let name = name.split('.').next().unwrap_or_default().trim();

    if name.is_empty() || name.eq_ignore_ascii_case("C") || name.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    parse_locale_tag(&name.replace('_', "-"))
        .ok()
        .map(|tag| tag.to_string())
}

/// The OS default locale, or [`DEFAULT_LOCALE`] when it is missing or unusable
pub fn environment_locale() -> String {
    let reported = sys_locale::get_locale();
    match reported.as_deref().and_then(normalize_locale_name) {
        Some(locale) => locale,
        None => {
            debug!(
                reported = reported.as_deref().unwrap_or("<none>"),
                fallback = DEFAULT_LOCALE,
                "environment locale unavailable"
            );
            DEFAULT_LOCALE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_names() {
        assert_eq!(normalize_locale_name("en_US").as_deref(), Some("en-US"));
        assert_eq!(normalize_locale_name("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(normalize_locale_name("sr_RS@latin").as_deref(), Some("sr-RS"));
        assert_eq!(normalize_locale_name("zh-hant-tw").as_deref(), Some("zh-Hant-TW"));
    }

    #[test]
    fn test_normalize_placeholders() {
        assert_eq!(normalize_locale_name("C"), None);
        assert_eq!(normalize_locale_name("C.UTF-8"), None);
        assert_eq!(normalize_locale_name("POSIX"), None);
        assert_eq!(normalize_locale_name(""), None);
        assert_eq!(normalize_locale_name("not a locale"), None);
    }

    #[test]
    fn test_environment_locale_is_well_formed() {
        let locale = environment_locale();
        assert!(parse_locale_tag(&locale).is_ok(), "{locale} should parse");
    }
}
