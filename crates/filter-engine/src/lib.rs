pub mod builder;
pub mod coerce;
pub mod error;
pub mod eval;
pub mod predicate;
pub mod settings;

pub use builder::{PredicateBuilder, build_predicate};
pub use coerce::coerce_value;
pub use error::{FilterError, Result};
pub use eval::Evaluator;
pub use predicate::Predicate;
pub use settings::{EnvGetter, FilterSettings};
