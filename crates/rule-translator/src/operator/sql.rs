use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL comparison emitted for a rule operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlOperator {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    In,
    NotIn,
    Between,
    NotBetween,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
}

impl SqlOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlOperator::Equal => "=",
            SqlOperator::NotEqual => "!=",
            SqlOperator::LessThan => "<",
            SqlOperator::LessOrEqual => "<=",
            SqlOperator::GreaterThan => ">",
            SqlOperator::GreaterOrEqual => ">=",
            SqlOperator::In => "IN",
            SqlOperator::NotIn => "NOT IN",
            SqlOperator::Between => "BETWEEN",
            SqlOperator::NotBetween => "NOT BETWEEN",
            SqlOperator::Like => "LIKE",
            SqlOperator::NotLike => "NOT LIKE",
            SqlOperator::IsNull => "IS NULL",
            SqlOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// IN / NOT IN / BETWEEN / NOT BETWEEN take a sequence of values.
    pub fn requires_array(&self) -> bool {
        matches!(
            self,
            SqlOperator::In | SqlOperator::NotIn | SqlOperator::Between | SqlOperator::NotBetween
        )
    }

    pub fn is_range(&self) -> bool {
        matches!(self, SqlOperator::Between | SqlOperator::NotBetween)
    }

    pub fn is_null_check(&self) -> bool {
        matches!(self, SqlOperator::IsNull | SqlOperator::IsNotNull)
    }
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_operator_display() {
        assert_eq!(format!("{}", SqlOperator::GreaterThan), ">");
        assert_eq!(format!("{}", SqlOperator::NotBetween), "NOT BETWEEN");
        assert_eq!(format!("{}", SqlOperator::IsNotNull), "IS NOT NULL");
    }

    #[test]
    fn test_array_operators() {
        assert!(SqlOperator::In.requires_array());
        assert!(SqlOperator::NotBetween.requires_array());
        assert!(!SqlOperator::Like.requires_array());
        assert!(!SqlOperator::IsNull.requires_array());
    }
}
