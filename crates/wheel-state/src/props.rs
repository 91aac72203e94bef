//! Color wheel configuration.
//!
//! [`ColorWheelProps`] is what a widget hands to [`ColorWheelState::new`]:
//! an optional controlled value, an optional default, a change callback and
//! the hue quantization step. Values can be given as colors or as strings;
//! strings are parsed when the state is built.
//!
//! [`WheelConfig`] is the static subset (step and default) that can be read
//! from a config file.
//!
//! [`ColorWheelState::new`]: crate::ColorWheelState::new

use std::fmt;

use serde::Deserialize;
use wheel_color::{Color, ColorError};

use crate::controlled::OnChange;

/// Hue quantization step used when none is given.
pub const DEFAULT_STEP: f64 = 1.0;

// ---------------------------------------------------------------------------
// ColorInput
// ---------------------------------------------------------------------------

/// A color as a caller may supply it: already parsed, or as a string.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Text(String),
    Color(Color),
}

impl ColorInput {
    /// Resolve to a [`Color`], parsing text input.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed text. A `Color` input always
    /// succeeds.
    pub fn into_color(self) -> Result<Color, ColorError> {
        match self {
            Self::Text(text) => Color::parse(&text),
            Self::Color(color) => Ok(color),
        }
    }

    /// True for text that is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// ColorWheelProps
// ---------------------------------------------------------------------------

/// Everything a color wheel is configured with.
pub struct ColorWheelProps {
    /// Controlled value. When set, the caller owns the color.
    pub value: Option<ColorInput>,
    /// Initial value for uncontrolled use.
    pub default_value: Option<ColorInput>,
    /// Called with every new color.
    pub on_change: Option<OnChange<Color>>,
    /// Hue quantization step in degrees. Must be positive.
    pub step: f64,
}

impl ColorWheelProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<ColorInput>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<ColorInput>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn on_change(mut self, on_change: impl FnMut(&Color) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl Default for ColorWheelProps {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            on_change: None,
            step: DEFAULT_STEP,
        }
    }
}

impl fmt::Debug for ColorWheelProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorWheelProps")
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("on_change", &self.on_change.is_some())
            .field("step", &self.step)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// WheelConfig
// ---------------------------------------------------------------------------

/// Static wheel configuration, loadable with serde.
///
/// ```toml
/// step = 15
/// default_value = "hsl(200, 80%, 50%)"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelConfig {
    pub step: f64,
    pub default_value: Option<Color>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            default_value: None,
        }
    }
}

impl From<WheelConfig> for ColorWheelProps {
    fn from(config: WheelConfig) -> Self {
        Self {
            default_value: config.default_value.map(ColorInput::Color),
            step: config.step,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_input_parses() {
        let color = ColorInput::from("#ff0000").into_color().unwrap();
        assert_eq!(color.to_rgb8(), (255, 0, 0));
    }

    #[test]
    fn color_input_passes_through() {
        let color = Color::hsl(10.0, 20.0, 30.0);
        assert_eq!(ColorInput::from(color).into_color(), Ok(color));
    }

    #[test]
    fn bad_text_input_is_an_error() {
        assert_eq!(
            ColorInput::from(String::from("nope")).into_color(),
            Err(ColorError::InvalidHex("nope".into()))
        );
    }

    #[test]
    fn blank_text_is_blank() {
        assert!(ColorInput::from("").is_blank());
        assert!(ColorInput::from("  \t").is_blank());
        assert!(!ColorInput::from("#fff").is_blank());
        assert!(!ColorInput::from(Color::hsl(0.0, 0.0, 0.0)).is_blank());
    }

    #[test]
    fn props_default_step_is_one() {
        let props = ColorWheelProps::new();
        assert!((props.step - 1.0).abs() < f64::EPSILON);
        assert!(props.value.is_none());
        assert!(props.default_value.is_none());
        assert!(props.on_change.is_none());
    }

    #[test]
    fn props_builder_sets_fields() {
        let props = ColorWheelProps::new()
            .value("hsl(10, 50%, 50%)")
            .default_value(Color::hsl(0.0, 0.0, 0.0))
            .on_change(|_| {})
            .step(15.0);
        assert_eq!(props.value, Some(ColorInput::Text("hsl(10, 50%, 50%)".into())));
        assert_eq!(
            props.default_value,
            Some(ColorInput::Color(Color::hsl(0.0, 0.0, 0.0)))
        );
        assert!(props.on_change.is_some());
        assert!((props.step - 15.0).abs() < f64::EPSILON);
    }

    // ── WheelConfig ──────────────────────────────────────────────────────

    #[test]
    fn config_from_toml() {
        let config: WheelConfig = toml::from_str(
            r#"
            step = 15
            default_value = "hsl(200, 80%, 50%)"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            WheelConfig {
                step: 15.0,
                default_value: Some(Color::hsl(200.0, 80.0, 50.0)),
            }
        );
    }

    #[test]
    fn config_defaults_when_empty() {
        let config: WheelConfig = toml::from_str("").unwrap();
        assert_eq!(config, WheelConfig::default());
    }

    #[test]
    fn config_rejects_bad_color() {
        assert!(toml::from_str::<WheelConfig>(r#"default_value = "hsl(1, 2)""#).is_err());
    }

    #[test]
    fn config_rejects_unknown_keys() {
        assert!(toml::from_str::<WheelConfig>("hue = 4").is_err());
    }

    #[test]
    fn config_into_props() {
        let props = ColorWheelProps::from(WheelConfig {
            step: 5.0,
            default_value: Some(Color::hsl(90.0, 50.0, 50.0)),
        });
        assert!(props.value.is_none());
        assert_eq!(
            props.default_value,
            Some(ColorInput::Color(Color::hsl(90.0, 50.0, 50.0)))
        );
        assert!((props.step - 5.0).abs() < f64::EPSILON);
    }
}
