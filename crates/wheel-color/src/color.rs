// SPDX-License-Identifier: MIT
//
// The color value: three components in a named space, plus alpha.
//
// A color keeps the space it was written in. Nothing is silently converted
// on construction, so `hsl(200, 40%, 30%)` reads back exactly what went in,
// and so does its hue after a trip through `with_channel_value`.
//
// Channel access works across spaces:
//
//   read   → convert a copy into the space that owns the channel, read it
//   write  → convert into that space, replace the component, return it
//
// Hue and saturation are owned by both HSL and HSB, so an HSB color stays
// HSB when its hue is edited. RGB colors move to HSL for hue/saturation.

// Component triples are x/y/z in, a/b/c out; the names carry no meaning.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::channel::ColorChannel;
use crate::convert;
use crate::error::ColorError;
use crate::parse;

// ─── ColorSpace ──────────────────────────────────────────────────────────────

/// The space a [`Color`]'s three components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue — each 0–255.
    Rgb,
    /// Hue (degrees), saturation and lightness (percent).
    Hsl,
    /// Hue (degrees), saturation and brightness (percent). Also known as HSV.
    Hsb,
}

impl ColorSpace {
    /// The three channels of this space, in component order.
    #[must_use]
    pub const fn channels(self) -> [ColorChannel; 3] {
        match self {
            Self::Rgb => [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue],
            Self::Hsl => [
                ColorChannel::Hue,
                ColorChannel::Saturation,
                ColorChannel::Lightness,
            ],
            Self::Hsb => [
                ColorChannel::Hue,
                ColorChannel::Saturation,
                ColorChannel::Brightness,
            ],
        }
    }

    /// Component index of `channel` in this space, if the space has it.
    #[must_use]
    pub fn index_of(self, channel: ColorChannel) -> Option<usize> {
        self.channels().iter().position(|&c| c == channel)
    }

    /// CSS function name without the alpha suffix.
    const fn css_name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsb => "hsb",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color value.
///
/// Every "edit" returns a new `Color`; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use wheel_color::{Color, ColorChannel};
///
/// let red: Color = "hsl(0, 100%, 50%)".parse().unwrap();
/// let cyan = red.with_channel_value(ColorChannel::Hue, 180.0);
///
/// assert_eq!(red.channel_value(ColorChannel::Hue), 0.0);
/// assert_eq!(cyan.channel_value(ColorChannel::Hue), 180.0);
/// assert_eq!(cyan.to_string(), "hsl(180, 100%, 50%)");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    space: ColorSpace,
    components: [f64; 3],
    alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Build a color from raw components in `space`.
    ///
    /// Hue is wrapped into `[0, 360)`; every other component (and alpha)
    /// is clamped into its channel range.
    #[must_use]
    pub fn new(space: ColorSpace, components: [f64; 3], alpha: f64) -> Self {
        let channels = space.channels();
        let mut normalized = [0.0; 3];
        for ((slot, channel), value) in normalized.iter_mut().zip(channels).zip(components) {
            *slot = normalize_channel(channel, value);
        }
        Self {
            space,
            components: normalized,
            alpha: normalize_channel(ColorChannel::Alpha, alpha),
        }
    }

    /// Opaque RGB color, components 0–255.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(ColorSpace::Rgb, [r, g, b], 1.0)
    }

    /// RGB color with alpha (0–1).
    #[must_use]
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Rgb, [r, g, b], alpha)
    }

    /// Opaque HSL color: hue in degrees, saturation and lightness in percent.
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(ColorSpace::Hsl, [h, s, l], 1.0)
    }

    #[must_use]
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Hsl, [h, s, l], alpha)
    }

    /// Opaque HSB color: hue in degrees, saturation and brightness in percent.
    #[must_use]
    pub fn hsb(h: f64, s: f64, b: f64) -> Self {
        Self::new(ColorSpace::Hsb, [h, s, b], 1.0)
    }

    #[must_use]
    pub fn hsba(h: f64, s: f64, b: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Hsb, [h, s, b], alpha)
    }

    /// Parse a color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (with or without `#`)
    /// and the functional forms `rgb()`, `rgba()`, `hsl()`, `hsla()`,
    /// `hsb()`, `hsba()`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing the first problem found.
    pub fn parse(s: &str) -> crate::Result<Self> {
        parse::parse_color(s)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn space(self) -> ColorSpace {
        self.space
    }

    /// The three components in the color's own space.
    #[inline]
    #[must_use]
    pub const fn components(self) -> [f64; 3] {
        self.components
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// The channels native to this color's space.
    #[must_use]
    pub const fn channels(self) -> [ColorChannel; 3] {
        self.space.channels()
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Read a channel.
    ///
    /// Channels outside the color's space are read through a conversion,
    /// so this never fails: the hue of an RGB color is its HSL hue.
    #[must_use]
    pub fn channel_value(self, channel: ColorChannel) -> f64 {
        if channel == ColorChannel::Alpha {
            return self.alpha;
        }
        let space = self.space_for(channel);
        let converted = self.to_space(space);
        space
            .index_of(channel)
            .map_or(0.0, |idx| converted.components[idx])
    }

    /// Return a copy with one channel replaced.
    ///
    /// The value is normalized like [`Color::new`] does it. If the channel
    /// isn't native to this color's space, the result is expressed in the
    /// space that owns it: RGB → HSL for hue and saturation, HSL for
    /// lightness, HSB for brightness, RGB for red/green/blue.
    #[must_use]
    pub fn with_channel_value(self, channel: ColorChannel, value: f64) -> Self {
        if channel == ColorChannel::Alpha {
            return Self {
                alpha: normalize_channel(channel, value),
                ..self
            };
        }
        let space = self.space_for(channel);
        let mut next = self.to_space(space);
        if let Some(idx) = space.index_of(channel) {
            next.components[idx] = normalize_channel(channel, value);
        }
        next
    }

    /// The space a channel edit lands in.
    const fn space_for(self, channel: ColorChannel) -> ColorSpace {
        match channel {
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => ColorSpace::Rgb,
            ColorChannel::Hue | ColorChannel::Saturation => match self.space {
                ColorSpace::Rgb => ColorSpace::Hsl,
                space => space,
            },
            ColorChannel::Lightness => ColorSpace::Hsl,
            ColorChannel::Brightness => ColorSpace::Hsb,
            ColorChannel::Alpha => self.space,
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Express this color in another space. Alpha is preserved.
    #[must_use]
    pub fn to_space(self, space: ColorSpace) -> Self {
        if self.space == space {
            return self;
        }
        let [x, y, z] = self.components;
        let (a, b, c) = match (self.space, space) {
            (ColorSpace::Rgb, ColorSpace::Hsl) => convert::rgb_to_hsl(x, y, z),
            (ColorSpace::Rgb, ColorSpace::Hsb) => convert::rgb_to_hsb(x, y, z),
            (ColorSpace::Hsl, ColorSpace::Rgb) => convert::hsl_to_rgb(x, y, z),
            (ColorSpace::Hsl, ColorSpace::Hsb) => convert::hsl_to_hsb(x, y, z),
            (ColorSpace::Hsb, ColorSpace::Rgb) => convert::hsb_to_rgb(x, y, z),
            (ColorSpace::Hsb, ColorSpace::Hsl) => convert::hsb_to_hsl(x, y, z),
            _ => (x, y, z),
        };
        Self::new(space, [a, b, c], self.alpha)
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let [r, g, b] = self.to_space(ColorSpace::Rgb).components;
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to hex string (`#rrggbb` or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha * 255.0);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// CSS functional notation in the color's own space.
    ///
    /// Components are rounded to two decimals. The output parses back
    /// through [`Color::parse`].
    #[must_use]
    pub fn to_css(self) -> String {
        let [x, y, z] = self.components.map(fmt_component);
        let name = self.space.css_name();
        let body = match self.space {
            ColorSpace::Rgb => format!("{x}, {y}, {z}"),
            ColorSpace::Hsl | ColorSpace::Hsb => format!("{x}, {y}%, {z}%"),
        };
        if self.is_opaque() {
            format!("{name}({body})")
        } else {
            format!("{name}a({body}, {})", fmt_component(self.alpha))
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.components;
        if self.is_opaque() {
            write!(f, "Color::{}({x:.2}, {y:.2}, {z:.2})", self.space)
        } else {
            write!(
                f,
                "Color::{}a({x:.2}, {y:.2}, {z:.2}, {:.2})",
                self.space, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Wrap a hue angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    // `+ 0.0` folds -0.0 into 0.0.
    if h >= 360.0 { 0.0 } else { h + 0.0 }
}

#[inline]
fn normalize_channel(channel: ColorChannel, value: f64) -> f64 {
    if channel == ColorChannel::Hue {
        normalize_hue(value)
    } else {
        channel.range().clamp(value)
    }
}

fn fmt_component(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

/// Round a 0–255 float to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
