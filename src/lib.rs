//! Ordinal Stone - ordinal regression loss layers in Rust
//!
//! The crate scores a model's per-bin outputs against a step-function
//! target derived from an integer ordinal label: the raw outputs are
//! accumulated into a cumulative profile, compared elementwise with the
//! target, and reduced to a batch-and-bin mean squared error. The paired
//! backward pass turns the retained difference into a gradient for the
//! raw outputs.

pub mod error;
pub mod layers;
pub mod ops;

#[cfg(feature = "python")]
mod bindings;

pub use error::{LossError, Result};
pub use layers::{GradientMode, OrdinalCdfLoss};
