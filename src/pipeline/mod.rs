//! Row normalization and aggregation stages.

pub mod aggregate;
pub mod normalize;

pub use aggregate::aggregate_and_rank;
pub use normalize::{normalize_row, normalize_rows};
