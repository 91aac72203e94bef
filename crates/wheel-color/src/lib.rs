// SPDX-License-Identifier: MIT
//
// wheel-color — Color values for hue-wheel.
//
// A small, immutable color type that remembers which space it was written
// in (RGB, HSL or HSB) and exposes every component as a named channel.
// Reading a channel never fails: channels that are not native to the
// color's space are read through a conversion. Writing a channel returns
// a new color, converting into the space that owns the channel first.
//
// Strings are parsed the way CSS writes them (`#rrggbb`, `rgb()`, `hsl()`,
// plus the `hsb()` form color pickers use), and `Display` writes them back
// in the same notation.

pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod parse;

pub use channel::{ChannelRange, ColorChannel};
pub use color::{Color, ColorSpace, normalize_hue};
pub use error::{ColorError, Result};
