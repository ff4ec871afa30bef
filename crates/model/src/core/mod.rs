pub mod data_type;
pub mod time_span;
pub mod value;
