use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// How a column is compared against a filter value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    #[default]
    Equal,
    #[serde(alias = "GreaterThanOrEqual")]
    GreaterOrEqual,
    #[serde(alias = "LessThanOrEqual")]
    LessOrEqual,
    NotEqual,
}

/// Logical operator joining a term to the terms before it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Connector {
    #[default]
    #[serde(alias = "AndAlso")]
    And,
    #[serde(alias = "OrElse")]
    Or,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::NotEqual => "!=",
        }
    }

    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            ComparisonOperator::GreaterOrEqual | ComparisonOperator::LessOrEqual
        )
    }
}

impl Connector {
    pub fn keyword(&self) -> &'static str {
        match self {
            Connector::And => "AndAlso",
            Connector::Or => "OrElse",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ComparisonOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "==" | "=" | "eq" | "equal" => Ok(ComparisonOperator::Equal),
            ">=" | "ge" | "greaterorequal" | "greaterthanorequal" => {
                Ok(ComparisonOperator::GreaterOrEqual)
            }
            "<=" | "le" | "lessorequal" | "lessthanorequal" => Ok(ComparisonOperator::LessOrEqual),
            "!=" | "<>" | "ne" | "notequal" => Ok(ComparisonOperator::NotEqual),
            _ => Err(format!("Unknown comparison operator: {s}")),
        }
    }
}

impl FromStr for Connector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "&&" | "andalso" => Ok(Connector::And),
            "or" | "||" | "orelse" => Ok(Connector::Or),
            _ => Err(format!("Unknown connector: {s}")),
        }
    }
}

/// One `column <op> value` term of a filter, with the connector that joins it
/// to the terms before it. The connector of the first active term is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterParameter {
    pub column_name: String,
    /// Raw textual value; terms with an empty or null value are skipped.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(default)]
    pub operator: ComparisonOperator,
    #[serde(default)]
    pub connector: Connector,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FilterParameter {
    pub fn new(column_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_operator(mut self, operator: ComparisonOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Ordered filter terms; order decides how terms are folded together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FilterParameterList {
    parameters: Vec<FilterParameter>,
}

impl FilterParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parameter: FilterParameter) {
        self.parameters.push(parameter);
    }

    /// Appends a term joined with `And`.
    pub fn and(
        mut self,
        column_name: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        self.push(
            FilterParameter::new(column_name, value)
                .with_operator(operator)
                .with_connector(Connector::And),
        );
        self
    }

    /// Appends a term joined with `Or`.
    pub fn or(
        mut self,
        column_name: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        self.push(
            FilterParameter::new(column_name, value)
                .with_operator(operator)
                .with_connector(Connector::Or),
        );
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterParameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl From<Vec<FilterParameter>> for FilterParameterList {
    fn from(parameters: Vec<FilterParameter>) -> Self {
        Self { parameters }
    }
}

impl FromIterator<FilterParameter> for FilterParameterList {
    fn from_iter<I: IntoIterator<Item = FilterParameter>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FilterParameterList {
    type Item = FilterParameter;
    type IntoIter = std::vec::IntoIter<FilterParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterParameterList {
    type Item = &'a FilterParameter;
    type IntoIter = std::slice::Iter<'a, FilterParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
