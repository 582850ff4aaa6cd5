use winnow::Parser;
use winnow::combinator::repeat;

use crate::parser::tokens::parse_affix_token;
use crate::types::{AffixPattern, AffixToken};

/// Parse a locale-data affix pattern such as `"#\u{a0}%"` or `"¤ #"`
///
/// The pattern must contain exactly one number placeholder (`#`); tokens before it
/// become the prefix and tokens after it the suffix.
pub fn parse_affix_pattern(input_str: &str) -> Result<AffixPattern, String> {
    let mut input = input_str;
    let tokens: Vec<AffixToken> = repeat(0.., parse_affix_token)
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    if !input.is_empty() {
        return Err(format!("Unterminated quote in affix pattern: '{input}'"));
    }

    let mut split = tokens.splitn(2, |t| *t == AffixToken::Number);
    let prefix = split.next().unwrap_or_default().to_vec();
    let suffix = match split.next() {
        Some(rest) => rest.to_vec(),
        None => {
            return Err(format!(
                "Affix pattern has no number placeholder: '{input_str}'"
            ));
        }
    };
    if suffix.contains(&AffixToken::Number) {
        return Err(format!(
            "Affix pattern has more than one number placeholder: '{input_str}'"
        ));
    }

    Ok(AffixPattern { prefix, suffix })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_percent() {
        let pattern = parse_affix_pattern("#\u{a0}%").unwrap();
        assert!(pattern.prefix.is_empty());
        assert_eq!(
            pattern.suffix,
            vec![
                AffixToken::Literal("\u{a0}".to_string()),
                AffixToken::Percent
            ]
        );
    }

    #[test]
    fn test_prefix_currency() {
        let pattern = parse_affix_pattern("¤ #").unwrap();
        assert_eq!(
            pattern.prefix,
            vec![AffixToken::Currency, AffixToken::Literal(" ".to_string())]
        );
        assert!(pattern.suffix.is_empty());
    }

    #[test]
    fn test_quoted_literal() {
        let pattern = parse_affix_pattern("'#'#").unwrap();
        assert_eq!(pattern.prefix, vec![AffixToken::Literal("#".to_string())]);
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(parse_affix_pattern("%").is_err());
        assert!(parse_affix_pattern("#%#").is_err());
        assert!(parse_affix_pattern("'#").is_err());
    }
}
