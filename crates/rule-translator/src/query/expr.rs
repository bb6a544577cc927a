use crate::{operator::SqlOperator, rule::Connective};
use std::fmt;

/// Right-hand side of a single comparison, as placeholder names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// `IS NULL` / `IS NOT NULL`: nothing on the right.
    None,
    /// Compared against the empty-string literal `''`.
    Blank,
    Param(String),
    /// `IN (:a, :b, ...)`
    List(Vec<String>),
    /// `BETWEEN :a AND :b`
    Range(String, String),
}

/// One field comparison: `field <operator> <operand>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: String,
    pub operator: SqlOperator,
    pub operand: Operand,
}

impl Predicate {
    /// Placeholder names referenced by this predicate, in order.
    pub fn parameters(&self) -> Vec<&str> {
        match &self.operand {
            Operand::None | Operand::Blank => vec![],
            Operand::Param(p) => vec![p.as_str()],
            Operand::List(ps) => ps.iter().map(String::as_str).collect(),
            Operand::Range(low, high) => vec![low.as_str(), high.as_str()],
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.operator)?;
        match &self.operand {
            Operand::None => Ok(()),
            Operand::Blank => write!(f, " ''"),
            Operand::Param(p) => write!(f, " :{p}"),
            Operand::List(ps) => {
                let ps = ps.iter().map(|p| format!(":{p}")).collect::<Vec<_>>();
                write!(f, " ({})", ps.join(", "))
            }
            Operand::Range(low, high) => write!(f, " :{low} AND :{high}"),
        }
    }
}

/// A boolean expression over predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr {
    /// A single comparison
    Leaf(Predicate),

    /// An AND of 1+ sub-expressions
    And(Vec<FilterExpr>),

    /// An OR of 1+ sub-expressions
    Or(Vec<FilterExpr>),
}

impl FilterExpr {
    pub fn leaf(predicate: Predicate) -> Self {
        FilterExpr::Leaf(predicate)
    }

    /// Folds the parts of one group under its connective.
    ///
    /// * no parts → `None`
    /// * one part → that part, unwrapped
    /// * else → one composite
    pub fn group(connective: Connective, mut parts: Vec<FilterExpr>) -> Option<FilterExpr> {
        match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(match connective {
                Connective::And => FilterExpr::And(parts),
                Connective::Or => FilterExpr::Or(parts),
            }),
        }
    }

    /// Appends `other` with `connective`.
    ///
    /// Extends the current composite when the connective matches; otherwise
    /// the current expression becomes the first operand of a new composite,
    /// which brackets it when rendered.
    pub fn combine(self, connective: Connective, other: FilterExpr) -> FilterExpr {
        match (self, connective) {
            (FilterExpr::And(mut parts), Connective::And) => {
                parts.push(other);
                FilterExpr::And(parts)
            }
            (FilterExpr::Or(mut parts), Connective::Or) => {
                parts.push(other);
                FilterExpr::Or(parts)
            }
            (current, Connective::And) => FilterExpr::And(vec![current, other]),
            (current, Connective::Or) => FilterExpr::Or(vec![current, other]),
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, FilterExpr::Leaf(_))
    }

    /// All leaf predicates, left to right.
    pub fn predicates(&self) -> Vec<&Predicate> {
        match self {
            FilterExpr::Leaf(p) => vec![p],
            FilterExpr::And(exprs) | FilterExpr::Or(exprs) => {
                exprs.iter().flat_map(|e| e.predicates()).collect()
            }
        }
    }

    /// Placeholder names in the order they appear in the rendered SQL.
    pub fn parameters(&self) -> Vec<&str> {
        self.predicates()
            .into_iter()
            .flat_map(|p| p.parameters())
            .collect()
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_composite() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::Leaf(p) => write!(f, "{p}"),
            FilterExpr::And(exprs) | FilterExpr::Or(exprs) => {
                let joiner = if matches!(self, FilterExpr::And(_)) {
                    " AND "
                } else {
                    " OR "
                };
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(joiner)?;
                    }
                    expr.fmt_operand(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(field: &str, op: SqlOperator, param: &str) -> FilterExpr {
        FilterExpr::leaf(Predicate {
            field: field.into(),
            operator: op,
            operand: Operand::Param(param.into()),
        })
    }

    #[test]
    fn test_predicate_display() {
        let range = Predicate {
            field: "age".into(),
            operator: SqlOperator::Between,
            operand: Operand::Range("p0".into(), "p1".into()),
        };
        assert_eq!(range.to_string(), "age BETWEEN :p0 AND :p1");

        let list = Predicate {
            field: "id".into(),
            operator: SqlOperator::NotIn,
            operand: Operand::List(vec!["p0".into(), "p1".into(), "p2".into()]),
        };
        assert_eq!(list.to_string(), "id NOT IN (:p0, :p1, :p2)");

        let null = Predicate {
            field: "name".into(),
            operator: SqlOperator::IsNull,
            operand: Operand::None,
        };
        assert_eq!(null.to_string(), "name IS NULL");
        assert!(null.parameters().is_empty());

        let blank = Predicate {
            field: "name".into(),
            operator: SqlOperator::NotEqual,
            operand: Operand::Blank,
        };
        assert_eq!(blank.to_string(), "name != ''");
    }

    #[test]
    fn test_group_collapses_single_part() {
        assert_eq!(FilterExpr::group(Connective::Or, vec![]), None);

        let pair = FilterExpr::group(
            Connective::And,
            vec![
                cmp("a", SqlOperator::Equal, "p0"),
                cmp("b", SqlOperator::Equal, "p1"),
            ],
        );
        assert_eq!(pair.map(|e| e.to_string()).as_deref(), Some("a = :p0 AND b = :p1"));

        let single = FilterExpr::group(Connective::Or, vec![cmp("a", SqlOperator::Equal, "p0")]);
        assert_eq!(single, Some(cmp("a", SqlOperator::Equal, "p0")));
    }

    #[test]
    fn test_combine_brackets_when_connective_changes() {
        let expr = cmp("a", SqlOperator::Equal, "p0")
            .combine(Connective::Or, cmp("b", SqlOperator::Equal, "p1"))
            .combine(Connective::Or, cmp("c", SqlOperator::Equal, "p2"))
            .combine(Connective::And, cmp("d", SqlOperator::Equal, "p3"));

        assert_eq!(
            expr.to_string(),
            "(a = :p0 OR b = :p1 OR c = :p2) AND d = :p3"
        );
        assert_eq!(expr.parameters(), vec!["p0", "p1", "p2", "p3"]);
        assert!(matches!(expr, FilterExpr::And(ref parts) if parts.len() == 2));
    }

    #[test]
    fn test_nested_composite_is_parenthesized() {
        let inner = FilterExpr::Or(vec![
            cmp("b", SqlOperator::LessThan, "p1"),
            cmp("c", SqlOperator::GreaterThan, "p2"),
        ]);
        let expr = cmp("a", SqlOperator::Equal, "p0").combine(Connective::And, inner);
        assert_eq!(expr.to_string(), "a = :p0 AND (b < :p1 OR c > :p2)");
    }
}
