use winnow::combinator::{alt, preceded, repeat};
use winnow::token::{literal, none_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::AffixToken;

fn is_alpha(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_digit(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

// A subtag runs up to the next '-' or the end of input; the callers verify its shape
fn subtag<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

// Tag subtags
pub fn parse_language<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    subtag
        .verify(|s: &str| matches!(s.len(), 2..=3 | 5..=8) && is_alpha(s))
        .parse_next(input)
}

pub fn parse_script<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('-', subtag.verify(|s: &str| s.len() == 4 && is_alpha(s))).parse_next(input)
}

pub fn parse_region<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        '-',
        subtag.verify(|s: &str| (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && is_digit(s))),
    )
    .parse_next(input)
}

pub fn parse_variant<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(
        '-',
        subtag.verify(|s: &str| {
            matches!(s.len(), 5..=8) || (s.len() == 4 && s.starts_with(|c: char| c.is_ascii_digit()))
        }),
    )
    .parse_next(input)
}

/// Extension sequence such as `-u-nu-latn`, returned without the leading '-'
pub fn parse_extension(input: &mut &str) -> ModalResult<String> {
    let singleton = preceded(
        '-',
        subtag.verify(|s: &str| s.len() == 1 && !s.eq_ignore_ascii_case("x")),
    )
    .parse_next(input)?;
    let subtags: Vec<&str> = repeat(
        1..,
        preceded('-', subtag.verify(|s: &str| matches!(s.len(), 2..=8))),
    )
    .parse_next(input)?;
    Ok(format!("{}-{}", singleton, subtags.join("-")).to_ascii_lowercase())
}

/// Private-use sequence such as `-x-legacy`, returned without the `x-` prefix
pub fn parse_private_use(input: &mut &str) -> ModalResult<String> {
    preceded('-', subtag.verify(|s: &str| s.eq_ignore_ascii_case("x"))).parse_next(input)?;
    let subtags: Vec<&str> = repeat(
        1..,
        preceded('-', subtag.verify(|s: &str| s.len() <= 8)),
    )
    .parse_next(input)?;
    Ok(subtags.join("-").to_ascii_lowercase())
}

// Affix pattern tokens
pub fn parse_number_placeholder(input: &mut &str) -> ModalResult<AffixToken> {
    literal("#").value(AffixToken::Number).parse_next(input)
}

pub fn parse_percent_placeholder(input: &mut &str) -> ModalResult<AffixToken> {
    literal("%").value(AffixToken::Percent).parse_next(input)
}

pub fn parse_currency_placeholder(input: &mut &str) -> ModalResult<AffixToken> {
    literal("¤").value(AffixToken::Currency).parse_next(input)
}

pub fn parse_quoted_literal(input: &mut &str) -> ModalResult<AffixToken> {
    preceded('\'', (take_while(0.., |c: char| c != '\''), '\''))
        .map(|(text, _): (&str, char)| AffixToken::Literal(text.to_string()))
        .parse_next(input)
}

pub fn parse_plain_literal(input: &mut &str) -> ModalResult<AffixToken> {
    repeat(1.., none_of(['#', '%', '¤', '\'']))
        .map(|chars: String| AffixToken::Literal(chars))
        .parse_next(input)
}

pub fn parse_affix_token(input: &mut &str) -> ModalResult<AffixToken> {
    alt((
        parse_number_placeholder,
        parse_percent_placeholder,
        parse_currency_placeholder,
        parse_quoted_literal,
        parse_plain_literal,
    ))
    .parse_next(input)
}
