// SPDX-License-Identifier: MIT
//
// Named color channels and their numeric ranges.
//
//   Channel      Range      Step   Owning space
//   ─────────────────────────────────────────────
//   red          0–255      1      RGB
//   green        0–255      1      RGB
//   blue         0–255      1      RGB
//   hue          0–360      1      HSL / HSB
//   saturation   0–100      1      HSL / HSB
//   lightness    0–100      1      HSL
//   brightness   0–100      1      HSB
//   alpha        0–1        0.01   any

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A single named numeric component of a [`Color`](crate::Color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    /// Angle on the color wheel, in degrees. Always kept in `[0, 360)`.
    Hue,
    /// Percentage. HSL saturation for RGB and HSL colors, HSB saturation
    /// for HSB colors.
    Saturation,
    Lightness,
    Brightness,
    Alpha,
}

/// The valid interval and natural increment of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ChannelRange {
    /// Clamp `value` into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl ColorChannel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Hue,
        Self::Saturation,
        Self::Lightness,
        Self::Brightness,
        Self::Alpha,
    ];

    /// Lowercase channel name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Brightness => "brightness",
            Self::Alpha => "alpha",
        }
    }

    #[must_use]
    pub const fn range(self) -> ChannelRange {
        match self {
            Self::Red | Self::Green | Self::Blue => ChannelRange {
                min: 0.0,
                max: 255.0,
                step: 1.0,
            },
            Self::Hue => ChannelRange {
                min: 0.0,
                max: 360.0,
                step: 1.0,
            },
            Self::Saturation | Self::Lightness | Self::Brightness => ChannelRange {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
            Self::Alpha => ChannelRange {
                min: 0.0,
                max: 1.0,
                step: 0.01,
            },
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|channel| channel.name() == lower)
            .ok_or_else(|| ColorError::UnknownChannel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for channel in ColorChannel::ALL {
            assert_eq!(channel.name().parse::<ColorChannel>(), Ok(channel));
        }
    }

    #[test]
    fn from_str_ignores_case_and_padding() {
        assert_eq!(" Hue ".parse::<ColorChannel>(), Ok(ColorChannel::Hue));
    }

    #[test]
    fn unknown_channel_is_an_error() {
        assert_eq!(
            "chroma".parse::<ColorChannel>(),
            Err(ColorError::UnknownChannel("chroma".into()))
        );
    }

    #[test]
    fn hue_range_is_a_full_turn() {
        let range = ColorChannel::Hue.range();
        assert!((range.max - range.min - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clamp_respects_bounds() {
        let range = ColorChannel::Lightness.range();
        assert!((range.clamp(120.0) - 100.0).abs() < f64::EPSILON);
        assert!(range.clamp(-3.0).abs() < f64::EPSILON);
    }
}
