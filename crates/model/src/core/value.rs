use crate::core::{data_type::DataType, time_span::TimeSpan};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash::Hash};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    DateTime(NaiveDateTime),
    TimeSpan(TimeSpan),
    Bytes(Vec<u8>),
    Null,
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use Value::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Int(v) => v.hash(state),
            Long(v) => v.hash(state),
            // Hash the bits of the float to handle NaN and -0.0 correctly
            Float(v) => v.to_bits().hash(state),
            Double(v) => v.to_bits().hash(state),
            Boolean(v) => v.hash(state),
            String(v) => v.hash(state),
            DateTime(v) => v.hash(state),
            TimeSpan(v) => v.hash(state),
            Bytes(v) => v.hash(state),
            Null => {}
        }
    }
}

impl Value {
    /// Orders two values of the same type. Mixed types, `Null` and NaN are unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Long(a), Long(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Double(a), Double(b)) => a.partial_cmp(b),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (DateTime(a), DateTime(b)) => Some(a.cmp(b)),
            (TimeSpan(a), TimeSpan(b)) => Some(a.cmp(b)),
            (Bytes(a), Bytes(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Data type of the value, `None` for `Null`.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Int(_) => Some(DataType::Int),
            Value::Long(_) => Some(DataType::Long),
            Value::Float(_) => Some(DataType::Float),
            Value::Double(_) => Some(DataType::Double),
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::String(_) => Some(DataType::String),
            Value::DateTime(_) => Some(DataType::DateTime),
            Value::TimeSpan(_) => Some(DataType::TimeSpan),
            Value::Bytes(_) => Some(DataType::Bytes),
            Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{}\"", v.replace('"', "\\\"")),
            Value::DateTime(v) => write!(f, "{v}"),
            Value::TimeSpan(v) => write!(f, "{v}"),
            Value::Bytes(v) => {
                let hex = v
                    .iter()
                    .fold(String::new(), |acc, byte: &u8| acc + &format!("{byte:02x}"));
                write!(f, "0x{hex}")
            }
            Value::Null => write!(f, "null"),
        }
    }
}
