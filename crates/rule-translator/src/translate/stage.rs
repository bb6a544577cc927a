use crate::{
    query::{expr::FilterExpr, sink::PredicateSink},
    rule::Connective,
    value::Value,
};

/// Predicates and bindings collected for one group before they reach the
/// caller's sink.
#[derive(Debug, Default)]
pub struct StagedPredicates {
    parts: Vec<(Connective, FilterExpr)>,
    bindings: Vec<(String, Value)>,
}

impl StagedPredicates {
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parameter_count(&self) -> usize {
        self.bindings.len()
    }

    /// Folds this group under its own `condition` and adds the result to
    /// `parent` joined with `connective`. An empty group adds nothing.
    pub fn attach_to<S: PredicateSink>(
        self,
        parent: &mut S,
        condition: Connective,
        connective: Connective,
    ) {
        let exprs = self.parts.into_iter().map(|(_, expr)| expr).collect();
        let Some(folded) = FilterExpr::group(condition, exprs) else {
            return;
        };

        parent.add_predicate(folded, connective);
        for (name, value) in self.bindings {
            parent.bind_parameter(&name, value);
        }
    }

    /// Hands every staged predicate, then every binding, to `sink`.
    pub fn commit<S: PredicateSink>(self, sink: &mut S) {
        for (connective, expr) in self.parts {
            sink.add_predicate(expr, connective);
        }
        for (name, value) in self.bindings {
            sink.bind_parameter(&name, value);
        }
    }
}

impl PredicateSink for StagedPredicates {
    fn add_predicate(&mut self, predicate: FilterExpr, connective: Connective) {
        self.parts.push((connective, predicate));
    }

    fn bind_parameter(&mut self, name: &str, value: Value) {
        self.bindings.push((name.to_string(), value));
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.bindings.iter().any(|(bound, _)| bound == name)
    }
}
