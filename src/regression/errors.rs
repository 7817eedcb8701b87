//! Regression error types.
//!
//! ┌ chain misuse
//! │  ├ building a chain from an empty list
//! │  └ replacing a value at the head of the chain (no predecessor)
//! └ malformed input points
//!    ├ non-finite coordinates
//!    ├ non-positive or non-finite weight
//!    └ invalid minimum x spacing

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("empty input: at least one point is required")]
    EmptyInput,

    #[error("cannot replace values at the start of the chain")]
    ReplaceAtHead,

    #[error("non-finite coordinate in input point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("point weight must be finite and > 0. got {got}")]
    InvalidWeight { got: f64 },

    #[error("invalid minimum x spacing: must be finite and >= 0. got {got}")]
    InvalidXMinSpacing { got: f64 },
}
