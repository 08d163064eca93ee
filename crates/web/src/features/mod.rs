pub mod names;
pub mod sums;
