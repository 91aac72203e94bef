// SPDX-License-Identifier: MIT
//
// hue-wheel — state for interactive color wheels.
//
// This crate wires together the workspace:
//
//   wheel-color → the color value (RGB / HSL / HSB, channels, parsing)
//   wheel-state → controlled/uncontrolled value, quantized hue, dragging
//
// A rendering layer builds one `ColorWheelState` per mounted wheel, reads
// `hue()` to place the thumb, and feeds pointer samples into `set_hue()`
// between `set_dragging(true)` and `set_dragging(false)`:
//
//   pointer down → set_dragging(true)
//   pointer move → set_hue(angle)   (no-op unless the rounded hue moved)
//   pointer up   → set_dragging(false)

pub use wheel_color::{ChannelRange, Color, ColorChannel, ColorError, ColorSpace, normalize_hue};
pub use wheel_state::{
    ColorInput, ColorWheelProps, ColorWheelState, ControlledState, LocalState, OnChange,
    WheelConfig, default_color, round_to_step,
};
