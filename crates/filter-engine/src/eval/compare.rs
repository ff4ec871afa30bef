use model::{core::value::Value, filter::parameter::ComparisonOperator};
use std::cmp::Ordering;
use tracing::warn;

/// Comparison evaluator for a field value (left) against a filter constant (right)
pub(crate) struct ComparisonEvaluator<'a> {
    left: &'a Value,
    right: &'a Value,
    op: ComparisonOperator,
}

impl<'a> ComparisonEvaluator<'a> {
    pub fn new(left: &'a Value, right: &'a Value, op: ComparisonOperator) -> Self {
        Self { left, right, op }
    }

    pub fn evaluate(&self) -> bool {
        use Value::*;

        match (self.left, self.right) {
            (Null, Null) => self.eval_null_null(),
            (Null, _) | (_, Null) => self.eval_null_other(),
            (l, r) if l.data_type() == r.data_type() => self.eval_ordering(l.compare(r)),
            (l, r) => {
                warn!(
                    "Type mismatch in comparison: {:?} {} {:?}",
                    l.data_type(),
                    self.op,
                    r.data_type()
                );
                false
            }
        }
    }

    // NaN leaves `ordering` empty, so only NotEqual holds
    fn eval_ordering(&self, ordering: Option<Ordering>) -> bool {
        match self.op {
            ComparisonOperator::Equal => ordering == Some(Ordering::Equal),
            ComparisonOperator::NotEqual => ordering != Some(Ordering::Equal),
            ComparisonOperator::GreaterOrEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            }
            ComparisonOperator::LessOrEqual => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            }
        }
    }

    fn eval_null_null(&self) -> bool {
        matches!(self.op, ComparisonOperator::Equal)
    }

    fn eval_null_other(&self) -> bool {
        matches!(self.op, ComparisonOperator::NotEqual)
    }
}
