//! Defines the core rendering trait and context for converting predicates to
//! positional SQL.

use crate::{
    error::RenderError,
    query::{
        dialect::Dialect,
        expr::{FilterExpr, Operand, Predicate},
    },
    value::Value,
};

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, resolving named
/// placeholders against the bindings and numbering them for the dialect.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    bindings: &'a [(String, Value)],
    unbound: Vec<String>,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, bindings: &'a [(String, Value)]) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            bindings,
            unbound: Vec::new(),
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(mut self) -> Result<(String, Vec<Value>), RenderError> {
        if !self.unbound.is_empty() {
            return Err(RenderError::UnboundParameter(self.unbound.remove(0)));
        }
        Ok((self.sql, self.params))
    }

    pub fn add_param(&mut self, name: &str) {
        match self.bindings.iter().find(|(bound, _)| bound == name) {
            Some((_, value)) => self.params.push(value.clone()),
            None => {
                self.unbound.push(name.to_string());
                self.params.push(Value::Null);
            }
        }
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }
}

impl Render for Predicate {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&r.dialect.quote_path(&self.field));
        r.sql.push(' ');
        r.sql.push_str(self.operator.as_sql());

        match &self.operand {
            Operand::None => {}
            Operand::Blank => r.sql.push_str(" ''"),
            Operand::Param(name) => {
                r.sql.push(' ');
                r.add_param(name);
            }
            Operand::List(names) => {
                r.sql.push_str(" (");
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    r.add_param(name);
                }
                r.sql.push(')');
            }
            Operand::Range(low, high) => {
                r.sql.push(' ');
                r.add_param(low);
                r.sql.push_str(" AND ");
                r.add_param(high);
            }
        }
    }
}

impl Render for FilterExpr {
    fn render(&self, r: &mut Renderer) {
        let (exprs, joiner) = match self {
            FilterExpr::Leaf(predicate) => return predicate.render(r),
            FilterExpr::And(exprs) => (exprs, " AND "),
            FilterExpr::Or(exprs) => (exprs, " OR "),
        };

        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(joiner);
            }
            if expr.is_composite() {
                r.sql.push('(');
                expr.render(r);
                r.sql.push(')');
            } else {
                expr.render(r);
            }
        }
    }
}
