pub mod batch;
pub mod scan;
pub mod step;

pub use self::batch::{dot_flat, scaled_assign};
pub use self::scan::{prefix_sum_row, suffix_sum_row};
pub use self::step::fill_step_row;
