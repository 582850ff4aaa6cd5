use crate::error::IntlError;
use crate::registry::*;
use crate::types::*;

fn registry_with_host(host: Option<&str>) -> FormatterRegistry {
    FormatterRegistry::with_fallbacks(host.map(str::to_string), "en-GB")
}

#[test]
fn test_digits_pin_both_fraction_bounds() {
    let registry = registry_with_host(Some("en-US"));
    for digits in [0, 1, 2, 3, 7, 20, 100] {
        registry.set_digits(digits);
        let resolved = registry.formatter().unwrap().resolved_options();
        assert_eq!(resolved.minimum_fraction_digits, digits);
        assert_eq!(resolved.maximum_fraction_digits, digits);
    }
}

#[test]
fn test_digits_pin_fraction_bounds_for_every_style() {
    let registry = registry_with_host(Some("en-US"));
    registry.set_digits(4);
    for options in [
        FormatOptions::default(),
        FormatOptions::percent(),
        FormatOptions::currency("USD"),
        FormatOptions::default().with_notation(Notation::Scientific),
    ] {
        registry.set_options(options);
        let resolved = registry.formatter().unwrap().resolved_options();
        assert_eq!(
            (resolved.minimum_fraction_digits, resolved.maximum_fraction_digits),
            (4, 4)
        );
    }
}

#[test]
fn test_override_wins_over_host_and_environment() {
    for host in [None, Some("ja-JP")] {
        let registry = registry_with_host(host);
        for locale in ["de-DE", "fr", "zh-Hant-TW", "es-419"] {
            registry.set_locale(locale);
            assert_eq!(registry.formatter().unwrap().requested_locale(), locale);
        }
    }
}

#[test]
fn test_fallback_chain() {
    let with_host = registry_with_host(Some("ja-JP"));
    assert_eq!(with_host.formatter().unwrap().requested_locale(), "ja-JP");

    let without_host = registry_with_host(None);
    assert_eq!(without_host.formatter().unwrap().requested_locale(), "en-GB");
}

#[test]
fn test_option_changes_merge_with_digits() {
    let registry = registry_with_host(Some("en-US"));
    registry.set_digits(1);
    registry.set_options(FormatOptions::percent());

    let formatter = registry.formatter().unwrap();
    assert_eq!(formatter.format(0.1234), "12.3%");
    let resolved = formatter.resolved_options();
    assert_eq!(resolved.style, Style::Percent);
    assert_eq!(resolved.maximum_fraction_digits, 1);
}

#[test]
fn test_consecutive_reads_are_equal() {
    let registry = registry_with_host(Some("en-US"));
    registry.set_options(FormatOptions::currency("EUR"));
    let a = registry.formatter().unwrap();
    let b = registry.formatter().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.resolved_options(), b.resolved_options());
}

#[test]
fn test_writes_visible_to_next_read() {
    let registry = registry_with_host(Some("en-US"));
    assert_eq!(registry.format(1.5).unwrap(), "1.50");
    registry.set_digits(0);
    assert_eq!(registry.format(1.5).unwrap(), "2");
    registry.set_locale("de-DE");
    registry.set_digits(1);
    assert_eq!(registry.format(1.25).unwrap(), "1,3");
}

#[test]
fn test_facility_errors_propagate_unchanged() {
    let registry = registry_with_host(Some("en-US"));

    registry.set_digits(101);
    assert_eq!(
        registry.formatter(),
        Err(IntlError::OutOfRange {
            option: "minimumFractionDigits",
            value: 101,
            min: 0,
            max: 100,
        })
    );

    registry.set_digits(2);
    registry.set_options(FormatOptions {
        style: Style::Currency,
        ..FormatOptions::default()
    });
    assert_eq!(registry.formatter(), Err(IntlError::MissingCurrency));
}

#[test]
fn test_derive_formatter_is_pure() {
    let options = FormatOptions::default();
    let a = derive_formatter("", 2, &options, "en-US").unwrap();
    let b = derive_formatter("", 2, &options, "en-US").unwrap();
    assert_eq!(a, b);

    let overridden = derive_formatter("de-DE", 2, &options, "en-US").unwrap();
    assert_eq!(overridden.requested_locale(), "de-DE");
    assert_eq!(overridden.format(1234.5), "1.234,50");
}
