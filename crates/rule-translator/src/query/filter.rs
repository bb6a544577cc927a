use crate::{
    error::RenderError,
    query::{
        dialect::Dialect,
        expr::FilterExpr,
        renderer::{Render, Renderer},
        sink::PredicateSink,
    },
    rule::Connective,
    value::Value,
};
use std::fmt;

/// In-memory WHERE clause with named parameter bindings.
///
/// Successive predicates combine like `andWhere` / `orWhere` on a query
/// builder: the first one becomes the expression, each later one is joined to
/// everything before it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub expr: Option<FilterExpr>,
    pub params: Vec<(String, Value)>,
}

impl FilterQuery {
    pub fn new() -> Self {
        FilterQuery::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// Render "WHERE ..." with named placeholders, or empty string if no expr.
    pub fn to_sql(&self) -> String {
        self.expr
            .as_ref()
            .map(|e| format!(" WHERE {e}"))
            .unwrap_or_default()
    }

    /// Renders the expression with the dialect's quoting and positional
    /// placeholders, returning the parameter values in placeholder order.
    pub fn render(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), RenderError> {
        let mut renderer = Renderer::new(dialect, &self.params);
        if let Some(expr) = &self.expr {
            expr.render(&mut renderer);
        }
        renderer.finish()
    }
}

impl PredicateSink for FilterQuery {
    fn add_predicate(&mut self, predicate: FilterExpr, connective: Connective) {
        self.expr = Some(match self.expr.take() {
            Some(existing) => existing.combine(connective, predicate),
            None => predicate,
        });
    }

    fn bind_parameter(&mut self, name: &str, value: Value) {
        match self.params.iter_mut().find(|(bound, _)| bound == name) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((name.to_string(), value)),
        }
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }
}

impl fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr {
            Some(expr) => write!(f, "{expr}"),
            None => Ok(()),
        }
    }
}
