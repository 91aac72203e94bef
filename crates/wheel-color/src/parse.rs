// SPDX-License-Identifier: MIT
//
// Color string parsing.
//
//   #rgb  #rgba  #rrggbb  #rrggbbaa      (leading `#` optional)
//   rgb(255, 0, 0)     rgba(255 0 0 / 50%)
//   hsl(0, 100%, 50%)  hsla(0deg 100% 50% / 0.5)
//   hsb(0, 100%, 100%) hsba(0, 100%, 100%, 0.5)
//
// Components may be separated by commas, whitespace or `/`. Out-of-range
// components are clamped (hue is wrapped) the same way `Color::new` does.

use crate::channel::ColorChannel;
use crate::color::{Color, ColorSpace};
use crate::error::{ColorError, Result};

/// Parse any supported color string.
///
/// # Errors
///
/// Returns [`ColorError`] for empty input, bad hex digits, unknown function
/// names, a wrong number of components, or components that aren't numbers.
pub fn parse_color(input: &str) -> Result<Color> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(open) = s.find('(') {
        return parse_function(input, s, open);
    }

    parse_hex(s).ok_or_else(|| ColorError::InvalidHex(input.to_string()))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    let (r, g, b, a) = match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            (r << 4 | r, g << 4 | g, b << 4 | b, 255)
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            (r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
        }
        // #RRGGBB
        6 => (
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
            255,
        ),
        // #RRGGBBAA
        8 => (
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
            parse_hex_byte(&bytes[6..8])?,
        ),
        _ => return None,
    };

    Some(Color::rgba(
        f64::from(r),
        f64::from(g),
        f64::from(b),
        f64::from(a) / 255.0,
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Functional Notation ─────────────────────────────────────────────────────

fn parse_function(input: &str, s: &str, open: usize) -> Result<Color> {
    let name = s[..open].trim().to_ascii_lowercase();
    let body = s[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ColorError::Malformed(input.to_string()))?;

    let space = match name.as_str() {
        "rgb" | "rgba" => ColorSpace::Rgb,
        "hsl" | "hsla" => ColorSpace::Hsl,
        "hsb" | "hsba" => ColorSpace::Hsb,
        _ => return Err(ColorError::UnknownFunction(name)),
    };

    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorError::ArgumentCount {
            function: name,
            found: parts.len(),
        });
    }

    let mut components = [0.0; 3];
    for ((slot, part), channel) in components.iter_mut().zip(&parts).zip(space.channels()) {
        *slot = parse_component(input, part, channel)?;
    }
    let alpha = match parts.get(3) {
        Some(part) => parse_component(input, part, ColorChannel::Alpha)?,
        None => 1.0,
    };

    Ok(Color::new(space, components, alpha))
}

/// Parse one component, resolving `%` and `deg` units for `channel`.
fn parse_component(input: &str, part: &str, channel: ColorChannel) -> Result<f64> {
    let invalid = || ColorError::InvalidComponent {
        input: input.to_string(),
        component: part.to_string(),
    };

    let (number, percent) = match part.strip_suffix('%') {
        Some(number) => (number, true),
        None if channel == ColorChannel::Hue => (part.strip_suffix("deg").unwrap_or(part), false),
        None => (part, false),
    };
    let value: f64 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    match channel {
        ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue if percent => {
            Ok(value / 100.0 * 255.0)
        }
        ColorChannel::Alpha if percent => Ok(value / 100.0),
        ColorChannel::Hue if percent => Err(invalid()),
        // Saturation, lightness and brightness are percentages either way.
        _ => Ok(value),
    }
}
