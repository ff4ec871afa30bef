pub mod core;
pub mod execution;
pub mod filter;
pub mod records;
