use crate::{
    coerce::coerce_value,
    error::{FilterError, Result},
    predicate::Predicate,
    settings::FilterSettings,
};
use model::{
    execution::expr::FilterExpression,
    filter::parameter::{FilterParameter, FilterParameterList},
    records::record::Filterable,
};
use tracing::{debug, warn};

/// Builds a predicate with default settings.
///
/// Returns `None` when no parameter carries a value, or when any parameter
/// names an unknown column, has a value that does not parse as the column's
/// type, or compares a column in a way its type does not support.
pub fn build_predicate<T: Filterable>(parameters: &FilterParameterList) -> Option<Predicate<T>> {
    PredicateBuilder::default().build(parameters)
}

/// Compiles filter parameter lists into predicates over a `Filterable` type.
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    settings: FilterSettings,
}

impl PredicateBuilder {
    pub fn new(settings: FilterSettings) -> Self {
        Self { settings }
    }

    /// Like [`try_build`](Self::try_build), but any failure yields `None`.
    pub fn build<T: Filterable>(&self, parameters: &FilterParameterList) -> Option<Predicate<T>> {
        match self.try_build(parameters) {
            Ok(predicate) => Some(predicate),
            Err(FilterError::NoParameters) => {
                debug!("No active filter parameters, no predicate built");
                None
            }
            Err(e) => {
                warn!("Discarding filter: {}", e);
                None
            }
        }
    }

    /// Folds the active parameters left to right into one predicate.
    ///
    /// Parameters with an empty value are skipped. The first active parameter
    /// seeds the expression and its connector is ignored; each later one is
    /// joined to everything before it by its own connector.
    pub fn try_build<T: Filterable>(&self, parameters: &FilterParameterList) -> Result<Predicate<T>> {
        let mut expression: Option<FilterExpression> = None;

        for parameter in parameters.iter().filter(|p| p.is_active()) {
            let term = self.compile_term::<T>(parameter)?;
            debug!(
                "Folding filter term {} {} '{}' ({})",
                parameter.column_name, parameter.operator, parameter.value, parameter.connector
            );

            expression = Some(match expression {
                None => term,
                Some(acc) => acc.combine(parameter.connector, term),
            });
        }

        expression.map(Predicate::new).ok_or(FilterError::NoParameters)
    }

    fn compile_term<T: Filterable>(&self, parameter: &FilterParameter) -> Result<FilterExpression> {
        let field = T::field(&parameter.column_name, self.settings.case_sensitive_columns)
            .ok_or_else(|| FilterError::UnknownColumn(parameter.column_name.clone()))?;

        if !field.data_type.is_filterable() {
            return Err(FilterError::UnsupportedType {
                column: field.name.to_string(),
                data_type: field.data_type,
            });
        }

        if parameter.operator.is_ordering() && !field.data_type.supports_ordering() {
            return Err(FilterError::UnsupportedComparison {
                column: field.name.to_string(),
                op: parameter.operator,
                data_type: field.data_type,
            });
        }

        let value = coerce_value(&parameter.value, field.data_type, &self.settings).ok_or_else(
            || FilterError::InvalidValue {
                column: field.name.to_string(),
                value: parameter.value.clone(),
                expected: field.data_type,
            },
        )?;

        Ok(FilterExpression::comparison(field.name, parameter.operator, value))
    }
}
