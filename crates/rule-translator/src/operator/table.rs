use super::{OperatorSpec, SqlOperator};
use lazy_static::lazy_static;
use std::collections::HashMap;

const PERCENT: Option<&str> = Some("%");

const STANDARD_OPERATORS: [OperatorSpec; 20] = [
    OperatorSpec::new("equal", SqlOperator::Equal),
    OperatorSpec::new("not_equal", SqlOperator::NotEqual),
    OperatorSpec::new("in", SqlOperator::In),
    OperatorSpec::new("not_in", SqlOperator::NotIn),
    OperatorSpec::new("less", SqlOperator::LessThan),
    OperatorSpec::new("less_or_equal", SqlOperator::LessOrEqual),
    OperatorSpec::new("greater", SqlOperator::GreaterThan),
    OperatorSpec::new("greater_or_equal", SqlOperator::GreaterOrEqual),
    OperatorSpec::new("between", SqlOperator::Between),
    OperatorSpec::new("not_between", SqlOperator::NotBetween),
    OperatorSpec::new("begins_with", SqlOperator::Like).with_affix(None, PERCENT),
    OperatorSpec::new("not_begins_with", SqlOperator::NotLike).with_affix(None, PERCENT),
    OperatorSpec::new("contains", SqlOperator::Like).with_affix(PERCENT, PERCENT),
    OperatorSpec::new("not_contains", SqlOperator::NotLike).with_affix(PERCENT, PERCENT),
    OperatorSpec::new("ends_with", SqlOperator::Like).with_affix(PERCENT, None),
    OperatorSpec::new("not_ends_with", SqlOperator::NotLike).with_affix(PERCENT, None),
    OperatorSpec::new("is_empty", SqlOperator::Equal).without_value(),
    OperatorSpec::new("is_not_empty", SqlOperator::NotEqual).without_value(),
    OperatorSpec::new("is_null", SqlOperator::IsNull).without_value(),
    OperatorSpec::new("is_not_null", SqlOperator::IsNotNull).without_value(),
];

lazy_static! {
    static ref STANDARD: OperatorTable = OperatorTable::new(STANDARD_OPERATORS);
}

/// Immutable lookup from operator name to its [`OperatorSpec`].
///
/// Translators borrow a table rather than reaching for a global, so tests can
/// run translators over reduced or extended vocabularies side by side.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    specs: HashMap<&'static str, OperatorSpec>,
}

impl OperatorTable {
    pub fn new(specs: impl IntoIterator<Item = OperatorSpec>) -> Self {
        Self {
            specs: specs.into_iter().map(|spec| (spec.name, spec)).collect(),
        }
    }

    /// The process-wide table of the standard widget operators.
    pub fn standard() -> &'static OperatorTable {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<&OperatorSpec> {
        self.specs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// All specs, sorted by name.
    pub fn specs(&self) -> Vec<&OperatorSpec> {
        let mut specs = self.specs.values().collect::<Vec<_>>();
        specs.sort_by_key(|spec| spec.name);
        specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
