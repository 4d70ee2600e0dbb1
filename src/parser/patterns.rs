//! Line matchers for the three shapes the parser cares about.
//!
//! Each matcher looks at a single line and returns its captures, so the
//! assembly logic in [`super::ClassAssembler`] never touches a regex.

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+(\w+)").expect("class pattern is valid"));

static FIELD_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[JsonProperty\("(\w+)"\)\]"#).expect("field name pattern is valid")
});

// `(\S+?)(\??)` keeps the nullability marker out of the base type.
static FIELD_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bpublic\s+((\S+?)(\??))\s+\w+").expect("field type pattern is valid")
});

/// Type token captured from a property declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken<'a> {
    pub source: &'a str,
    pub base: &'a str,
    pub explicit_nullable: bool,
}

/// `public class Order` -> `Order`
pub fn match_class_name(line: &str) -> Option<&str> {
    CLASS_NAME_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `[JsonProperty("id")]` -> `id`
pub fn match_field_name(line: &str) -> Option<&str> {
    FIELD_NAME_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `public string? Notes { get; set; }` -> `string?` / `string` / nullable
pub fn match_field_type(line: &str) -> Option<TypeToken<'_>> {
    let caps = FIELD_TYPE_RE.captures(line)?;
    Some(TypeToken {
        source: caps.get(1)?.as_str(),
        base: caps.get(2)?.as_str(),
        explicit_nullable: caps.get(3).is_some_and(|m| !m.as_str().is_empty()),
    })
}
