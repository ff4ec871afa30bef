use model::{core::data_type::DataType, filter::parameter::ComparisonOperator};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    #[error("No filter parameter carries a value")]
    NoParameters,

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{column}' has unsupported type {data_type}")]
    UnsupportedType { column: String, data_type: DataType },

    #[error("Failed to parse value '{value}' for column '{column}' as {expected}")]
    InvalidValue {
        column: String,
        value: String,
        expected: DataType,
    },

    #[error("Operator {op} is not defined for column '{column}' of type {data_type}")]
    UnsupportedComparison {
        column: String,
        op: ComparisonOperator,
        data_type: DataType,
    },

    #[error("Invalid setting {var}='{value}': {message}")]
    Settings {
        var: String,
        value: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
