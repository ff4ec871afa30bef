use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};

/// Function type for getting environment variables
pub type EnvGetter = fn(&str) -> Option<String>;

pub const CASE_SENSITIVE_COLUMNS_VAR: &str = "FILTER_CASE_SENSITIVE_COLUMNS";
pub const DATETIME_FORMATS_VAR: &str = "FILTER_DATETIME_FORMATS";
pub const DATE_FORMATS_VAR: &str = "FILTER_DATE_FORMATS";

/// Tunables for resolving columns and coercing raw filter values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterSettings {
    /// Match column names exactly instead of ignoring ASCII case.
    pub case_sensitive_columns: bool,
    /// `chrono` formats tried, in order, for date-time values that are not RFC 3339.
    pub datetime_formats: Vec<String>,
    /// Date-only formats; a match yields midnight.
    pub date_formats: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            case_sensitive_columns: false,
            datetime_formats: [
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M",
                "%Y-%m-%d %H:%M",
                "%m/%d/%Y %H:%M:%S",
                "%d.%m.%Y %H:%M:%S",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            date_formats: ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl FilterSettings {
    /// Defaults overlaid with `FILTER_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_getter(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `env_getter` returns for the `FILTER_*` keys.
    pub fn from_env_getter(env_getter: EnvGetter) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = env_getter(CASE_SENSITIVE_COLUMNS_VAR) {
            settings.case_sensitive_columns =
                raw.trim().to_lowercase().parse::<bool>().map_err(|_| {
                    FilterError::Settings {
                        var: CASE_SENSITIVE_COLUMNS_VAR.to_string(),
                        value: raw.clone(),
                        message: "expected true or false".to_string(),
                    }
                })?;
        }

        if let Some(raw) = env_getter(DATETIME_FORMATS_VAR) {
            settings.datetime_formats = parse_format_list(DATETIME_FORMATS_VAR, &raw)?;
        }

        if let Some(raw) = env_getter(DATE_FORMATS_VAR) {
            settings.date_formats = parse_format_list(DATE_FORMATS_VAR, &raw)?;
        }

        Ok(settings)
    }
}

fn parse_format_list(var: &str, raw: &str) -> Result<Vec<String>> {
    let formats: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect();

    if formats.is_empty() {
        return Err(FilterError::Settings {
            var: var.to_string(),
            value: raw.to_string(),
            message: "expected a comma-separated list of formats".to_string(),
        });
    }
    Ok(formats)
}
