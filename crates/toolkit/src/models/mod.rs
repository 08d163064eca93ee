pub mod name_format;
pub mod parsed_name;
pub mod series;

pub use name_format::NameFormat;
pub use parsed_name::ParsedName;
pub use series::{SeriesStep, SumReport};
