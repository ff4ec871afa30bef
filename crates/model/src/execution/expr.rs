use crate::{
    core::value::Value,
    filter::parameter::{ComparisonOperator, Connector},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiled filter, ready to be evaluated against records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterExpression {
    Comparison {
        column: String,
        op: ComparisonOperator,
        value: Value,
    },
    And(Box<FilterExpression>, Box<FilterExpression>),
    Or(Box<FilterExpression>, Box<FilterExpression>),
}

impl FilterExpression {
    pub fn comparison(column: impl Into<String>, op: ComparisonOperator, value: Value) -> Self {
        FilterExpression::Comparison {
            column: column.into(),
            op,
            value,
        }
    }

    /// Joins `self` (left) and `rhs` (right) with the given connector.
    pub fn combine(self, connector: Connector, rhs: FilterExpression) -> Self {
        match connector {
            Connector::And => FilterExpression::And(Box::new(self), Box::new(rhs)),
            Connector::Or => FilterExpression::Or(Box::new(self), Box::new(rhs)),
        }
    }

    /// Number of comparison leaves.
    pub fn term_count(&self) -> usize {
        match self {
            FilterExpression::Comparison { .. } => 1,
            FilterExpression::And(lhs, rhs) | FilterExpression::Or(lhs, rhs) => {
                lhs.term_count() + rhs.term_count()
            }
        }
    }

    /// Columns referenced by the expression, left to right.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        self.collect_columns(&mut columns);
        columns
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            FilterExpression::Comparison { column, .. } => out.push(column),
            FilterExpression::And(lhs, rhs) | FilterExpression::Or(lhs, rhs) => {
                lhs.collect_columns(out);
                rhs.collect_columns(out);
            }
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Comparison { column, op, value } => {
                write!(f, "(p.{column} {op} {value})")
            }
            FilterExpression::And(lhs, rhs) => write!(f, "({lhs} {} {rhs})", Connector::And),
            FilterExpression::Or(lhs, rhs) => write!(f, "({lhs} {} {rhs})", Connector::Or),
        }
    }
}
