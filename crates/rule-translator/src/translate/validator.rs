use crate::{
    error::{RuleSkip, TranslateError},
    operator::OperatorTable,
    rule::{FieldAllowList, RawRule},
};
use serde_json::Value as JsonValue;

/// Keys every leaf rule must carry.
pub const REQUIRED_KEYS: [&str; 6] = ["id", "field", "type", "input", "operator", "value"];

/// A leaf rule whose shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<'a> {
    pub id: &'a JsonValue,
    pub field: &'a str,
    pub ty: &'a str,
    pub input: &'a str,
    pub operator: &'a str,
    pub value: &'a JsonValue,
}

/// Checks the required keys and that the operator is in `operators`.
///
/// `value` may be JSON `null`; every other required key must be non-null, and
/// `field`, `type`, `input` and `operator` must be strings.
pub fn validate_rule<'a>(raw: &'a RawRule, operators: &OperatorTable) -> Result<Rule<'a>, RuleSkip> {
    let object = raw.object.as_ref().ok_or(RuleSkip::NotAnObject)?;

    let present = move |key: &'static str| match object.get(key) {
        None | Some(JsonValue::Null) => Err(RuleSkip::MissingKey(key)),
        Some(value) => Ok(value),
    };
    let text = move |key: &'static str| {
        present(key)?
            .as_str()
            .ok_or(RuleSkip::InvalidKey(key))
    };

    let id = present("id")?;
    let field = text("field")?;
    let ty = text("type")?;
    let input = text("input")?;
    let operator = text("operator")?;
    let value = object.get("value").ok_or(RuleSkip::MissingKey("value"))?;

    if !operators.contains(operator) {
        return Err(RuleSkip::UnknownOperator(operator.to_string()));
    }

    Ok(Rule {
        id,
        field,
        ty,
        input,
        operator,
        value,
    })
}

pub fn is_rule_correct(raw: &RawRule, operators: &OperatorTable) -> bool {
    validate_rule(raw, operators).is_ok()
}

/// Rejects fields outside the allow-list. `None` means no restriction.
pub fn ensure_field_allowed(field: &str, fields: Option<&FieldAllowList>) -> Result<(), TranslateError> {
    match fields {
        Some(list) if !list.contains(field) => Err(TranslateError::FieldNotAllowed {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Letters, digits and underscores, optionally dotted (`users.age`).
///
/// Fields are interpolated into SQL text, never bound, so without an
/// allow-list this is the only thing standing between a payload and the query.
pub fn is_safe_identifier(field: &str) -> bool {
    !field.is_empty()
        && field.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: JsonValue) -> RawRule {
        RawRule {
            object: value.as_object().cloned(),
        }
    }

    fn full_rule() -> JsonValue {
        json!({
            "id": "age", "field": "age", "type": "integer",
            "input": "number", "operator": "greater", "value": 18
        })
    }

    #[test]
    fn test_valid_rule() {
        let node = raw(full_rule());
        let rule = validate_rule(&node, OperatorTable::standard()).unwrap();
        assert_eq!(rule.field, "age");
        assert_eq!(rule.operator, "greater");
        assert_eq!(rule.value, &json!(18));
    }

    #[test]
    fn test_each_missing_key_is_reported() {
        for key in REQUIRED_KEYS {
            let mut value = full_rule();
            value.as_object_mut().unwrap().remove(key);
            let node = raw(value);
            assert_eq!(
                validate_rule(&node, OperatorTable::standard()).unwrap_err(),
                RuleSkip::MissingKey(key),
                "{key}"
            );
            assert!(!is_rule_correct(&node, OperatorTable::standard()));
        }
    }

    #[test]
    fn test_null_value_is_allowed_but_null_field_is_not() {
        let mut value = full_rule();
        value["value"] = JsonValue::Null;
        assert!(is_rule_correct(&raw(value.clone()), OperatorTable::standard()));

        value["field"] = JsonValue::Null;
        assert_eq!(
            validate_rule(&raw(value), OperatorTable::standard()).unwrap_err(),
            RuleSkip::MissingKey("field")
        );
    }

    #[test]
    fn test_non_string_operator() {
        let mut value = full_rule();
        value["operator"] = json!(3);
        assert_eq!(
            validate_rule(&raw(value), OperatorTable::standard()).unwrap_err(),
            RuleSkip::InvalidKey("operator")
        );
    }

    #[test]
    fn test_unknown_operator_and_non_object() {
        let mut value = full_rule();
        value["operator"] = json!("regex");
        assert_eq!(
            validate_rule(&raw(value), OperatorTable::standard()).unwrap_err(),
            RuleSkip::UnknownOperator("regex".into())
        );
        assert_eq!(
            validate_rule(&RawRule::default(), OperatorTable::standard()).unwrap_err(),
            RuleSkip::NotAnObject
        );
    }

    #[test]
    fn test_allow_list() {
        let list = FieldAllowList::new(["age"]);
        assert!(ensure_field_allowed("age", Some(&list)).is_ok());
        assert!(ensure_field_allowed("anything", None).is_ok());
        assert!(matches!(
            ensure_field_allowed("name", Some(&list)),
            Err(TranslateError::FieldNotAllowed { field }) if field == "name"
        ));
    }

    #[test]
    fn test_safe_identifier() {
        assert!(is_safe_identifier("age"));
        assert!(is_safe_identifier("users.created_at"));
        assert!(is_safe_identifier("_private1"));
        assert!(!is_safe_identifier(""));
        assert!(!is_safe_identifier("1abc"));
        assert!(!is_safe_identifier("users."));
        assert!(!is_safe_identifier("age; DROP TABLE users"));
        assert!(!is_safe_identifier("a = a OR 1"));
    }
}
