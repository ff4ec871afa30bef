use crate::eval::compare::ComparisonEvaluator;
use model::{execution::expr::FilterExpression, records::record::Filterable};
use tracing::warn;

/// Trait for evaluating compiled filters against a record
pub trait Evaluator {
    fn evaluate<T: Filterable>(&self, record: &T) -> bool;
}

impl Evaluator for FilterExpression {
    fn evaluate<T: Filterable>(&self, record: &T) -> bool {
        match self {
            FilterExpression::Comparison { column, op, value } => match record.field_value(column) {
                Some(field) => ComparisonEvaluator::new(&field, value, *op).evaluate(),
                None => {
                    warn!("Field '{}' is declared but has no value accessor", column);
                    false
                }
            },

            FilterExpression::And(lhs, rhs) => lhs.evaluate(record) && rhs.evaluate(record),

            FilterExpression::Or(lhs, rhs) => lhs.evaluate(record) || rhs.evaluate(record),
        }
    }
}
