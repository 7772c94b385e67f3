//! Color conversion and CSS helpers for terminal output.

use console::Color;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use spangle::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Splits a normalized declaration string into `(property, value)` pairs.
///
/// Empty and malformed entries are skipped; whitespace around names and
/// values is trimmed.
pub fn css_declarations(css: &str) -> impl Iterator<Item = (&str, &str)> {
    css.split(';').filter_map(|entry| {
        let (name, value) = entry.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name, value.trim()))
    })
}

/// Parses a CSS color into a terminal color.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and the eight basic color names.
/// Hex and `rgb()` colors map to the nearest 256-color palette entry.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim().to_ascii_lowercase();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).map(|rgb| Color::Color256(rgb_to_ansi256(rgb)));
    }
    if let Some(inner) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = inner
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color::Color256(rgb_to_ansi256((*r, *g, *b)))),
            _ => None,
        };
    }
    match value.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "fuchsia" => Some(Color::Magenta),
        "cyan" | "aqua" => Some(Color::Cyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}
