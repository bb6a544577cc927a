//! Decoded rule tree.
//!
//! A node is a group iff it carries a non-empty `rules` array. Everything else
//! is a leaf, even when leaf keys are missing; that is caught by validation.

use serde_json::{Map, Value as JsonValue};

#[derive(Debug, Clone, PartialEq)]
pub enum RuleNode {
    Leaf(RawRule),
    Group(RuleGroup),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleGroup {
    /// The raw `condition` text; `None` when absent or null.
    pub condition: Option<String>,
    pub rules: Vec<RuleNode>,
}

/// An undecoded leaf. `None` when the node was not a JSON object at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRule {
    pub object: Option<Map<String, JsonValue>>,
}

impl RuleNode {
    pub fn from_json(value: &JsonValue) -> RuleNode {
        match RuleGroup::from_json(value) {
            Some(group) => RuleNode::Group(group),
            None => RuleNode::Leaf(RawRule {
                object: value.as_object().cloned(),
            }),
        }
    }
}

impl RuleGroup {
    /// Decodes a group node, or `None` when `rules` is absent, not an array,
    /// or empty.
    pub fn from_json(value: &JsonValue) -> Option<RuleGroup> {
        let object = value.as_object()?;
        let rules = object.get("rules")?.as_array()?;
        if rules.is_empty() {
            return None;
        }

        let condition = match object.get("condition") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Some(RuleGroup {
            condition,
            rules: rules.iter().map(RuleNode::from_json).collect(),
        })
    }
}

impl RawRule {
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.object.as_ref().and_then(|o| o.get(key))
    }

    /// The rule id rendered for log lines.
    pub fn display_id(&self) -> String {
        match self.get("id") {
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<none>".to_string(),
        }
    }
}
