//! Locale tag and affix pattern parsing
//!
//! `parse_locale_tag` validates BCP-47 syntax and canonicalizes casing; it is the
//! check that makes a malformed locale override fail at formatter construction.
//! `parse_affix_pattern` reads the small placement patterns used by locale data.

mod affix;
mod locale_tag;
mod tokens;

pub use affix::parse_affix_pattern;
pub use locale_tag::parse_locale_tag;
