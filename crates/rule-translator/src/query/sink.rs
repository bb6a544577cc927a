use crate::{query::expr::FilterExpr, rule::Connective, value::Value};

/// The query object predicates are attached to.
///
/// Implemented by whatever accumulates the WHERE clause of a query. The
/// translator only appends; it never inspects or removes what is already there.
pub trait PredicateSink {
    /// Appends a predicate, joined to what came before with `connective`.
    fn add_predicate(&mut self, predicate: FilterExpr, connective: Connective);

    /// Binds a value to a placeholder name used by an added predicate.
    fn bind_parameter(&mut self, name: &str, value: Value);

    /// Whether `name` is already bound. Generated placeholder names skip
    /// every name this reports as taken.
    fn has_parameter(&self, name: &str) -> bool;
}

impl<S: PredicateSink + ?Sized> PredicateSink for &mut S {
    fn add_predicate(&mut self, predicate: FilterExpr, connective: Connective) {
        (**self).add_predicate(predicate, connective)
    }

    fn bind_parameter(&mut self, name: &str, value: Value) {
        (**self).bind_parameter(name, value)
    }

    fn has_parameter(&self, name: &str) -> bool {
        (**self).has_parameter(name)
    }
}
