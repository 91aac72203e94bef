//! Color wheel state.
//!
//! [`ColorWheelState`] is the state behind a hue wheel: the current color
//! (controlled or uncontrolled), the hue derived from it, and whether the
//! thumb is being dragged.
//!
//! ```text
//!   set_value(text | Color) ──parse──┐
//!                                    ▼
//!   set_hue(deg) ──round to step──► same hue? ──yes──► no-op
//!                                    │ no
//!                                    ▼
//!                         ControlledState::set_value ──► on_change
//!
//!   set_dragging(bool) ──► LocalState (no callback)
//! ```
//!
//! The hue is never stored. Every read projects it from the current color,
//! so the two can't drift apart.

use tracing::{debug, trace};
use wheel_color::{Color, ColorChannel, ColorError, normalize_hue};

use crate::controlled::ControlledState;
use crate::local::LocalState;
use crate::props::{ColorInput, ColorWheelProps};

/// The color a wheel starts at when neither a value nor a default is given.
#[must_use]
pub fn default_color() -> Color {
    Color::hsl(0.0, 100.0, 50.0)
}

/// Round `value` to the nearest multiple of `step`. Halves round away from
/// zero.
#[inline]
#[must_use]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// State of one color wheel, alive as long as the widget is mounted.
#[derive(Debug)]
pub struct ColorWheelState {
    value: ControlledState<Color>,
    dragging: LocalState<bool>,
    step: f64,
}

impl ColorWheelState {
    /// Build the wheel state from its props.
    ///
    /// With neither `value` nor `default_value`, the wheel is uncontrolled
    /// and starts at [`default_color`]. A blank `default_value` string
    /// counts as absent. A `step` that isn't positive is a caller error
    /// (checked in debug builds only).
    ///
    /// # Errors
    ///
    /// Returns the parse error if `value` or `default_value` is a malformed
    /// color string.
    pub fn new(props: ColorWheelProps) -> Result<Self, ColorError> {
        let ColorWheelProps {
            value,
            default_value,
            on_change,
            step,
        } = props;
        debug_assert!(step > 0.0, "color wheel step must be positive, got {step}");

        let default_value = default_value.filter(|input| !input.is_blank());
        let default_value = match (&value, default_value) {
            (None, None) => Some(ColorInput::Color(default_color())),
            (_, default_value) => default_value,
        };
        let value = value.map(ColorInput::into_color).transpose()?;
        let default_value = default_value.map(ColorInput::into_color).transpose()?;

        // A controlled wheel may have no default; the seed is never read then.
        let seed = default_value.or(value).unwrap_or_else(default_color);

        debug!(controlled = value.is_some(), step, "color wheel created");
        Ok(Self {
            value: ControlledState::new(value, seed, on_change),
            dragging: LocalState::new(false),
            step,
        })
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// The current color.
    #[must_use]
    pub fn value(&self) -> Color {
        *self.value.value()
    }

    /// Hue of the current color, in degrees.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.value().channel_value(ColorChannel::Hue)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        *self.dragging.get()
    }

    /// Hue quantization step in degrees.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// True if the caller owns the color (a `value` was supplied).
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// The current hue at full saturation and half lightness.
    ///
    /// This is what the wheel shows under the thumb, independent of the
    /// value's saturation and lightness.
    #[must_use]
    pub fn display_color(&self) -> Color {
        Color::hsl(self.hue(), 100.0, 50.0)
    }

    // ── Writes ───────────────────────────────────────────────────────────

    /// Request a new color.
    ///
    /// Strings are parsed first. The color is passed on as-is; whether it
    /// gets stored depends on the controlled mode.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed string. Nothing changes and
    /// no callback fires in that case.
    pub fn set_value(&mut self, value: impl Into<ColorInput>) -> Result<(), ColorError> {
        let color = value.into().into_color()?;
        self.value.set_value(color);
        Ok(())
    }

    /// Move the hue, rounded to the wheel's step.
    ///
    /// If the rounded hue equals the current one nothing happens: no new
    /// color, no callback. Continuous drag sampling relies on this.
    /// NaN and infinite hues are ignored.
    pub fn set_hue(&mut self, hue: f64) {
        let rounded = round_to_step(hue, self.step);
        if !rounded.is_finite() {
            trace!(hue, "set_hue: not finite");
            return;
        }

        // Compare what would be stored, so 360 and 0 are the same hue.
        let hue = normalize_hue(rounded);

        #[allow(clippy::float_cmp)] // exact equality is the change gate
        let unchanged = self.hue() == hue;
        if unchanged {
            trace!(hue, "set_hue: unchanged");
            return;
        }

        let next = self.value().with_channel_value(ColorChannel::Hue, hue);
        self.value.set_value(next);
    }

    /// Nudge the hue up by `step_size` (at least the wheel's step), wrapping
    /// past 360.
    pub fn increment(&mut self, step_size: f64) {
        let step = step_size.max(self.step);
        self.set_hue(self.hue() + step);
    }

    /// Nudge the hue down by `step_size` (at least the wheel's step),
    /// wrapping below 0.
    pub fn decrement(&mut self, step_size: f64) {
        let step = step_size.max(self.step);
        self.set_hue(self.hue() - step);
    }

    /// Record whether the thumb is being dragged. Always writes, never
    /// notifies.
    pub fn set_dragging(&mut self, dragging: bool) {
        trace!(dragging, "set_dragging");
        self.dragging.set(dragging);
    }

    /// Hand the wheel the caller's current controlled value.
    ///
    /// Call this when the owner re-renders with a new `value`. Has no
    /// effect on an uncontrolled wheel, and `None` never makes a controlled
    /// wheel uncontrolled.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed string.
    pub fn set_controlled_value(&mut self, value: Option<ColorInput>) -> Result<(), ColorError> {
        let value = value.map(ColorInput::into_color).transpose()?;
        self.value.sync(value);
        Ok(())
    }
}
