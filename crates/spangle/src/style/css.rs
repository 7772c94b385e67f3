//! Declaration-to-CSS normalization.
//!
//! Produces the declaration string handed to a host console alongside a
//! `%c` placeholder. Property names may be given in camel case
//! (`fontWeight`) or kebab case (`font-weight`); both normalize to kebab case.

use super::declarations::Declarations;

/// Numeric CSS properties that take no unit.
///
/// Numbers for any other property are rendered with a `px` suffix. Names are
/// listed in camel case, the form property names are folded to before lookup.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "columnCount",
    "fillOpacity",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "widows",
    "zIndex",
    "zoom",
];

/// Converts declarations into a single `property:value;` string.
///
/// Entries appear in insertion order. Numeric values get a `px` unit unless
/// the property is in [`UNITLESS_PROPERTIES`]; string values pass through.
///
/// # Example
///
/// ```rust
/// use spangle::{to_css, Declarations};
///
/// let decls = Declarations::new().add("opacity", 0.5).add("paddingLeft", 4);
/// assert_eq!(to_css(&decls), "opacity:0.5;padding-left:4px;");
/// ```
pub fn to_css(decls: &Declarations) -> String {
    let mut css = String::new();
    for (name, value) in decls.iter() {
        let camel = to_camel_case(name);
        css.push_str(&to_kebab_case(&camel));
        css.push(':');
        css.push_str(&value.to_string());
        if value.is_number() && !UNITLESS_PROPERTIES.contains(&camel.as_str()) {
            css.push_str("px");
        }
        css.push(';');
    }
    css
}

/// Converts a camel-case property name to kebab case.
///
/// Every ASCII uppercase letter becomes a hyphen followed by its lowercase form.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Folds kebab-case segments into camel case: a hyphen followed by a word
/// character becomes that character uppercased.
fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && (next.is_alphanumeric() || next == '_') => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
