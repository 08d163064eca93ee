pub mod name;
pub mod sum;
