#![allow(dead_code)]

use rule_translator::{Connective, FilterExpr, PredicateSink, Value};
use serde_json::{Value as JsonValue, json};

/// Records every call the translator makes, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub predicates: Vec<(String, Connective)>,
    pub bindings: Vec<(String, Value)>,
}

impl PredicateSink for RecordingSink {
    fn add_predicate(&mut self, predicate: FilterExpr, connective: Connective) {
        self.predicates.push((predicate.to_string(), connective));
    }

    fn bind_parameter(&mut self, name: &str, value: Value) {
        self.bindings.push((name.to_string(), value));
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.bindings.iter().any(|(bound, _)| bound == name)
    }
}

pub fn rule(field: &str, ty: &str, operator: &str, value: JsonValue) -> JsonValue {
    json!({
        "id": field,
        "field": field,
        "type": ty,
        "input": "text",
        "operator": operator,
        "value": value,
    })
}

pub fn group(condition: &str, rules: Vec<JsonValue>) -> JsonValue {
    json!({ "condition": condition, "rules": rules })
}
