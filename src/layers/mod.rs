pub mod ordinal;

pub use self::ordinal::{GradientMode, OrdinalCdfLoss};
