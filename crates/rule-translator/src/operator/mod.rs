//! The fixed operator vocabulary of the browser-side query builder.

use serde::Serialize;

pub mod sql;
pub mod table;

pub use sql::SqlOperator;
pub use table::OperatorTable;

/// How many values an operator binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueArity {
    /// No value at all (`is_null`, `is_empty`, ...).
    None,
    Scalar,
    /// One or more values (`in`, `not_in`).
    List,
    /// Exactly two bounds (`between`, `not_between`).
    Pair,
}

impl ValueArity {
    /// What a rule value must hold, as worded in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ValueArity::None => "no value",
            ValueArity::Scalar => "a single value",
            ValueArity::List => "at least one value",
            ValueArity::Pair => "exactly two values",
        }
    }
}

/// Wildcards wrapped around a LIKE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Affix {
    pub prepend: Option<&'static str>,
    pub append: Option<&'static str>,
}

impl Affix {
    pub const NONE: Affix = Affix {
        prepend: None,
        append: None,
    };

    pub fn is_none(&self) -> bool {
        self.prepend.is_none() && self.append.is_none()
    }

    pub fn apply(&self, value: &str) -> String {
        format!(
            "{}{}{}",
            self.prepend.unwrap_or_default(),
            value,
            self.append.unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorSpec {
    pub name: &'static str,
    pub accepts_value: bool,
    pub sql: SqlOperator,
    pub affix: Affix,
}

impl OperatorSpec {
    pub const fn new(name: &'static str, sql: SqlOperator) -> Self {
        OperatorSpec {
            name,
            accepts_value: true,
            sql,
            affix: Affix::NONE,
        }
    }

    /// Marks the operator as taking no value from the rule.
    pub const fn without_value(mut self) -> Self {
        self.accepts_value = false;
        self
    }

    pub const fn with_affix(
        mut self,
        prepend: Option<&'static str>,
        append: Option<&'static str>,
    ) -> Self {
        self.affix = Affix { prepend, append };
        self
    }

    pub fn requires_array(&self) -> bool {
        self.sql.requires_array()
    }

    pub fn is_null_check(&self) -> bool {
        self.sql.is_null_check()
    }

    /// `is_empty` / `is_not_empty`: compare against an empty-string literal.
    pub fn is_blank_check(&self) -> bool {
        !self.accepts_value && !self.is_null_check()
    }

    pub fn arity(&self) -> ValueArity {
        if !self.accepts_value {
            ValueArity::None
        } else if self.sql.is_range() {
            ValueArity::Pair
        } else if self.requires_array() {
            ValueArity::List
        } else {
            ValueArity::Scalar
        }
    }
}
