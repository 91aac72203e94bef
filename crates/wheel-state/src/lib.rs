//! # wheel-state — State for an interactive color wheel
//!
//! This crate holds everything a color wheel needs between pointer events:
//!
//! - **[`controlled`]** — `ControlledState<T>`, a value owned either by the
//!   caller (controlled) or by the state itself (uncontrolled), decided once
//! - **[`local`]** — `LocalState<T>`, a plain value cell for transient UI state
//! - **[`props`]** — `ColorWheelProps`, `ColorInput` and the serde-loadable
//!   `WheelConfig`
//! - **[`wheel`]** — `ColorWheelState`, the manager that ties them together:
//!   default selection, string normalization, quantized hue edits, dragging
//!
//! Everything here is single-threaded and synchronous. Change callbacks run
//! on the caller's thread before the setter returns.

pub mod controlled;
pub mod local;
pub mod props;
pub mod wheel;

pub use controlled::{ControlledState, OnChange};
pub use local::LocalState;
pub use props::{ColorInput, ColorWheelProps, WheelConfig};
pub use wheel::{ColorWheelState, default_color, round_to_step};
