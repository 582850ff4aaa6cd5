use crate::formatter::decimal::Decimal;
use crate::formatter::exponential::to_exponential;
use crate::locale::LocaleData;
use crate::types::{
    AffixPattern, AffixToken, Notation, Part, PartKind, SignDisplay, Style, UseGrouping,
};

/// Everything `format_parts` needs, resolved once at construction
pub(super) struct PartsSpec<'a> {
    pub data: &'a LocaleData,
    pub style: Style,
    pub currency_symbol: Option<&'a str>,
    pub use_grouping: UseGrouping,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
    pub sign_display: SignDisplay,
    pub notation: Notation,
}

enum Magnitude {
    Nan,
    Infinite,
    Finite {
        mantissa: Decimal,
        exponent: Option<i32>,
    },
}

pub(super) fn format_parts(value: f64, spec: &PartsSpec<'_>) -> Vec<Part> {
    let settings = &spec.data.settings;

    let magnitude = if value.is_nan() {
        Magnitude::Nan
    } else if value.is_infinite() {
        Magnitude::Infinite
    } else {
        let mut decimal = Decimal::from_f64(value);
        if spec.style == Style::Percent {
            decimal.shift(2);
        }
        match spec.notation {
            Notation::Standard => {
                decimal.round(spec.maximum_fraction_digits);
                Magnitude::Finite {
                    mantissa: decimal,
                    exponent: None,
                }
            }
            notation => {
                let (mantissa, exponent) =
                    to_exponential(decimal, notation, spec.maximum_fraction_digits);
                Magnitude::Finite {
                    mantissa,
                    exponent: Some(exponent),
                }
            }
        }
    };

    let mut parts = Vec::new();

    // Sign; NaN is never signed
    let is_zero = matches!(&magnitude, Magnitude::Finite { mantissa, .. } if mantissa.is_zero());
    let is_negative = value.is_sign_negative() && !value.is_nan();
    let sign = match (spec.sign_display, &magnitude) {
        (_, Magnitude::Nan) => None,
        (SignDisplay::Auto, _) => is_negative.then_some(PartKind::MinusSign),
        (SignDisplay::Always, _) => Some(if is_negative {
            PartKind::MinusSign
        } else {
            PartKind::PlusSign
        }),
        (SignDisplay::ExceptZero, _) if is_zero => None,
        (SignDisplay::ExceptZero, _) => Some(if is_negative {
            PartKind::MinusSign
        } else {
            PartKind::PlusSign
        }),
        (SignDisplay::Negative, _) => (is_negative && !is_zero).then_some(PartKind::MinusSign),
        (SignDisplay::Never, _) => None,
    };
    match sign {
        Some(PartKind::MinusSign) => parts.push(Part::new(PartKind::MinusSign, &settings.minus)),
        Some(kind) => parts.push(Part::new(kind, &settings.plus)),
        None => {}
    }

    let pattern = match spec.style {
        Style::Decimal => None,
        Style::Percent => Some(&spec.data.percent_pattern),
        Style::Currency => Some(&spec.data.currency_pattern),
    };

    if let Some(pattern) = pattern {
        push_affix(&mut parts, &pattern.prefix, spec, Side::Prefix);
    }

    match magnitude {
        Magnitude::Nan => parts.push(Part::new(PartKind::Nan, "NaN")),
        Magnitude::Infinite => parts.push(Part::new(PartKind::Infinity, "∞")),
        Magnitude::Finite { mantissa, exponent } => {
            push_number(&mut parts, &mantissa, spec);
            if let Some(exponent) = exponent {
                parts.push(Part::new(PartKind::ExponentSeparator, "E"));
                if exponent < 0 {
                    parts.push(Part::new(PartKind::ExponentMinusSign, &settings.minus));
                }
                parts.push(Part::new(
                    PartKind::ExponentInteger,
                    exponent.unsigned_abs().to_string(),
                ));
            }
        }
    }

    if let Some(AffixPattern { suffix, .. }) = pattern {
        push_affix(&mut parts, suffix, spec, Side::Suffix);
    }

    parts
}

fn push_number(parts: &mut Vec<Part>, mantissa: &Decimal, spec: &PartsSpec<'_>) {
    let settings = &spec.data.settings;
    let integer = mantissa.integer_digits(spec.minimum_integer_digits);
    let fraction = mantissa.fraction_digits(spec.minimum_fraction_digits);

    let primary = settings.primary_grouping.max(1) as usize;
    let secondary = settings.secondary_grouping.max(1) as usize;
    let min_grouping = match spec.use_grouping {
        UseGrouping::Auto => Some(settings.min_grouping_digits.max(1)),
        UseGrouping::Always => Some(1),
        UseGrouping::Min2 => Some(settings.min_grouping_digits.max(2)),
        UseGrouping::False => None,
    };

    // Grouping only applies to standard notation
    let grouped = spec.notation == Notation::Standard
        && min_grouping.is_some_and(|min| integer.len() >= primary + min as usize);

    if grouped {
        let (head, last) = integer.split_at(integer.len() - primary);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(secondary);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(last);

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                parts.push(Part::new(PartKind::Group, &settings.group));
            }
            parts.push(Part::new(PartKind::Integer, *group));
        }
    } else {
        parts.push(Part::new(PartKind::Integer, integer));
    }

    if !fraction.is_empty() {
        parts.push(Part::new(PartKind::Decimal, &settings.decimal));
        parts.push(Part::new(PartKind::Fraction, fraction));
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Prefix,
    Suffix,
}

fn push_affix(parts: &mut Vec<Part>, tokens: &[AffixToken], spec: &PartsSpec<'_>, side: Side) {
    let settings = &spec.data.settings;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            AffixToken::Number => {}
            AffixToken::Percent => parts.push(Part::new(PartKind::PercentSign, &settings.percent_sign)),
            AffixToken::Literal(text) => parts.push(Part::new(PartKind::Literal, text.as_str())),
            AffixToken::Currency => {
                let symbol = spec.currency_symbol.unwrap_or_default();
                let touches_number = match side {
                    Side::Prefix => i + 1 == tokens.len(),
                    Side::Suffix => i == 0,
                };
                // A letter-shaped symbol never sits directly against a digit
                let edge = match side {
                    Side::Prefix => symbol.chars().last(),
                    Side::Suffix => symbol.chars().next(),
                };
                let needs_space = touches_number && edge.is_some_and(char::is_alphabetic);

                if needs_space && side == Side::Suffix {
                    parts.push(Part::new(PartKind::Literal, "\u{a0}"));
                }
                parts.push(Part::new(PartKind::Currency, symbol));
                if needs_space && side == Side::Prefix {
                    parts.push(Part::new(PartKind::Literal, "\u{a0}"));
                }
            }
        }
    }
}
