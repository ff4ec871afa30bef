use crate::eval::Evaluator;
use model::{execution::expr::FilterExpression, records::record::Filterable};
use std::{fmt, marker::PhantomData, sync::Arc};

/// A compiled filter over records of type `T`.
///
/// Cloning is cheap; the expression tree is shared.
pub struct Predicate<T> {
    expression: Arc<FilterExpression>,
    _record: PhantomData<fn(&T) -> bool>,
}

impl<T> Predicate<T> {
    pub(crate) fn new(expression: FilterExpression) -> Self {
        Self {
            expression: Arc::new(expression),
            _record: PhantomData,
        }
    }

    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }
}

impl<T: Filterable> Predicate<T> {
    pub fn matches(&self, record: &T) -> bool {
        self.expression.evaluate(record)
    }

    /// Lazily keeps the records this predicate matches.
    pub fn filter<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a T> + 'a
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        T: 'a,
    {
        records.into_iter().filter(move |record| self.matches(record))
    }

    pub fn into_fn(self) -> impl Fn(&T) -> bool {
        move |record: &T| self.matches(record)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            expression: Arc::clone(&self.expression),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("expression", &self.expression)
            .finish()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p => {}", self.expression)
    }
}
