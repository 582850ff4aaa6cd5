use winnow::combinator::{opt, repeat};
use winnow::{ModalResult, Parser};

use crate::error::IntlError;
use crate::parser::tokens::*;
use crate::types::LocaleTag;

fn parse_tag(input: &mut &str) -> ModalResult<LocaleTag> {
    let language = parse_language.parse_next(input)?;
    let script = opt(parse_script).parse_next(input)?;
    let region = opt(parse_region).parse_next(input)?;
    let variants: Vec<&str> = repeat(0.., parse_variant).parse_next(input)?;
    let extensions: Vec<String> = repeat(0.., parse_extension).parse_next(input)?;
    let private_use = opt(parse_private_use).parse_next(input)?;

    Ok(LocaleTag {
        language: language.to_ascii_lowercase(),
        script: script.map(title_case),
        region: region.map(str::to_ascii_uppercase),
        variants: variants.into_iter().map(str::to_ascii_lowercase).collect(),
        extensions,
        private_use,
    })
}

fn title_case(subtag: &str) -> String {
    let mut out = subtag.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Parse and canonicalize a BCP-47 locale tag
///
/// # Examples
/// ```
/// use intl_registry::parser::parse_locale_tag;
///
/// let tag = parse_locale_tag("zh-hant-tw").unwrap();
/// assert_eq!(tag.to_string(), "zh-Hant-TW");
/// assert!(parse_locale_tag("en_US").is_err());
/// ```
pub fn parse_locale_tag(input_str: &str) -> Result<LocaleTag, IntlError> {
    let invalid = || IntlError::InvalidLocale(input_str.to_string());

    let mut input = input_str;
    let tag = parse_tag.parse_next(&mut input).map_err(|_| invalid())?;
    if !input.is_empty() {
        return Err(invalid());
    }

    // Repeated variants or extension singletons make the tag ill-formed
    for (i, variant) in tag.variants.iter().enumerate() {
        if tag.variants[..i].contains(variant) {
            return Err(invalid());
        }
    }
    for (i, extension) in tag.extensions.iter().enumerate() {
        let singleton = &extension[..1];
        if tag.extensions[..i].iter().any(|e| &e[..1] == singleton) {
            return Err(invalid());
        }
    }

    Ok(tag)
}
