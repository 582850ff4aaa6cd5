#[cfg(test)]
mod tests {
    use intl_registry::types::{CurrencyDisplay, FormatOptions, NumberFormatOptions};
    use intl_registry::{FormatterRegistry, IntlError, NumberFormat};

    // Helper function to format with a specific locale and currency
    fn fmt_currency(
        value: f64,
        locale: &str,
        format: FormatOptions,
        digits: u32,
    ) -> Result<String, IntlError> {
        let options = NumberFormatOptions::from(format).with_fraction_digits(digits);
        Ok(NumberFormat::new(locale, &options)?.format(value))
    }

    #[test]
    fn test_currency_symbol_euro() -> Result<(), IntlError> {
        let eur = FormatOptions::currency("EUR");
        assert_eq!(fmt_currency(1234.56, "en-US", eur.clone(), 2)?, "€1,234.56");
        assert_eq!(fmt_currency(-1234.56, "en-US", eur.clone(), 2)?, "-€1,234.56");
        assert_eq!(fmt_currency(1234.56, "de-DE", eur.clone(), 2)?, "1.234,56\u{a0}€");
        assert_eq!(fmt_currency(1234.56, "de-AT", eur.clone(), 2)?, "€\u{a0}1\u{a0}234,56");
        assert_eq!(fmt_currency(0.0, "fr-FR", eur, 2)?, "0,00\u{a0}€");
        Ok(())
    }

    #[test]
    fn test_currency_symbol_yen() -> Result<(), IntlError> {
        let jpy = FormatOptions::currency("JPY");
        assert_eq!(fmt_currency(12345.0, "ja-JP", jpy.clone(), 0)?, "￥12,345");
        assert_eq!(fmt_currency(-12345.0, "ja-JP", jpy.clone(), 0)?, "-￥12,345");
        assert_eq!(fmt_currency(12345.0, "en-US", jpy, 0)?, "¥12,345");
        Ok(())
    }

    #[test]
    fn test_currency_symbol_depends_on_locale() -> Result<(), IntlError> {
        let cad = FormatOptions::currency("CAD");
        assert_eq!(fmt_currency(5.0, "en-CA", cad.clone(), 2)?, "$5.00");
        assert_eq!(fmt_currency(5.0, "en-US", cad, 2)?, "CA$5.00");

        let pln = FormatOptions::currency("PLN");
        assert_eq!(fmt_currency(5.0, "pl-PL", pln.clone(), 2)?, "5,00\u{a0}zł");
        assert_eq!(fmt_currency(5.0, "en-US", pln, 2)?, "PLN\u{a0}5.00");
        Ok(())
    }

    #[test]
    fn test_letter_symbols_are_spaced() -> Result<(), IntlError> {
        let chf = FormatOptions::currency("CHF");
        assert_eq!(fmt_currency(789.0, "en-US", chf.clone(), 2)?, "CHF\u{a0}789.00");
        assert_eq!(fmt_currency(789.0, "de-CH", chf, 2)?, "CHF\u{a0}789.00");

        let code = FormatOptions::currency("usd").with_currency_display(CurrencyDisplay::Code);
        assert_eq!(fmt_currency(1.0, "en-US", code.clone(), 2)?, "USD\u{a0}1.00");
        assert_eq!(fmt_currency(1.0, "sv", code, 2)?, "1,00\u{a0}USD");
        Ok(())
    }

    #[test]
    fn test_unknown_currency_uses_code() -> Result<(), IntlError> {
        let xyz = FormatOptions::currency("XYZ");
        assert_eq!(fmt_currency(3.0, "en-US", xyz, 0)?, "XYZ\u{a0}3");
        Ok(())
    }

    #[test]
    fn test_registry_digits_override_currency_defaults() {
        let registry = FormatterRegistry::with_fallbacks(Some("en-US".to_string()), "en-US");
        registry.set_options(FormatOptions::currency("USD"));
        registry.set_digits(0);
        assert_eq!(registry.format(1234.5).unwrap(), "$1,235");

        registry.set_digits(3);
        assert_eq!(registry.format(1234.5).unwrap(), "$1,234.500");
    }

    #[test]
    fn test_invalid_currency_codes() {
        for code in ["", "EU", "EURO", "E1R"] {
            assert_eq!(
                fmt_currency(1.0, "en-US", FormatOptions::currency(code), 2),
                Err(IntlError::InvalidCurrency(code.to_string()))
            );
        }
    }
}
