use crate::settings::FilterSettings;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use model::core::{data_type::DataType, time_span::TimeSpan, value::Value};

/// Parse a raw filter value as the given field type.
///
/// Returns `None` when the text does not parse or the type cannot be filtered on.
/// Strings are taken verbatim; every other type ignores surrounding whitespace.
pub fn coerce_value(raw: &str, data_type: DataType, settings: &FilterSettings) -> Option<Value> {
    let trimmed = raw.trim();
    match data_type {
        DataType::Int => trimmed.parse::<i32>().ok().map(Value::Int),
        DataType::Float => trimmed.parse::<f32>().ok().map(Value::Float),
        DataType::Double => trimmed.parse::<f64>().ok().map(Value::Double),
        DataType::Boolean => parse_bool(trimmed).map(Value::Boolean),
        DataType::String => Some(Value::String(raw.to_string())),
        DataType::DateTime => parse_datetime(trimmed, settings).map(Value::DateTime),
        DataType::TimeSpan => trimmed.parse::<TimeSpan>().ok().map(Value::TimeSpan),
        DataType::Long | DataType::Bytes => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_datetime(s: &str, settings: &FilterSettings) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    settings
        .datetime_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            settings
                .date_formats
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
