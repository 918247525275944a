use thiserror::Error;

/// Errors reported by the loss evaluator.
///
/// Every variant is detected synchronously, before any working buffer is
/// written, so a failed call never leaves a half-updated cycle behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LossError {
    /// A shape invariant was violated (e.g. wrong column count).
    #[error("dimension mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// The batch has no samples; the batch mean would divide by zero.
    #[error("empty batch")]
    EmptyBatch,

    /// An ordinal label lies outside `[0, bin_count]`.
    #[error("label {label} out of range for {bin_count} bins (sample {sample})")]
    LabelOutOfRange {
        sample: usize,
        label: usize,
        bin_count: usize,
    },

    /// Backward was invoked without a preceding successful forward.
    #[error("backward called without a preceding forward")]
    MissingForward,
}

pub type Result<T> = std::result::Result<T, LossError>;
