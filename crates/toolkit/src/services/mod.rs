pub mod name_formatting;
pub mod summation;
