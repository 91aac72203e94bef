// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Reasons a color string could not be turned into a [`Color`](crate::Color).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    #[error("malformed color function {0:?}")]
    Malformed(String),

    #[error("unknown color function `{0}`")]
    UnknownFunction(String),

    #[error("`{function}` takes 3 or 4 components, got {found}")]
    ArgumentCount { function: String, found: usize },

    #[error("invalid component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },

    #[error("unknown color channel `{0}`")]
    UnknownChannel(String),
}

/// Result type for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;
