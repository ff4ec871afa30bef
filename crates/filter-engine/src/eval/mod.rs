mod compare;
mod runtime;

pub use runtime::Evaluator;
