use serde::{Deserialize, Serialize};
use std::fmt;

/// Static type of a record field, as declared by its `Filterable` schema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Long,
    Float,
    Double,
    Boolean,
    String,
    DateTime,
    TimeSpan,
    Bytes,
}

impl DataType {
    /// Whether a raw filter value can be coerced into this type.
    pub fn is_filterable(&self) -> bool {
        matches!(
            self,
            DataType::Int
                | DataType::Float
                | DataType::Double
                | DataType::Boolean
                | DataType::String
                | DataType::DateTime
                | DataType::TimeSpan
        )
    }

    /// Whether `>=` and `<=` are defined for this type.
    pub fn supports_ordering(&self) -> bool {
        matches!(
            self,
            DataType::Int
                | DataType::Long
                | DataType::Float
                | DataType::Double
                | DataType::DateTime
                | DataType::TimeSpan
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Boolean => "bool",
            DataType::String => "string",
            DataType::DateTime => "datetime",
            DataType::TimeSpan => "timespan",
            DataType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
