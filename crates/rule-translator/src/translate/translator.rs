use crate::{
    config::TranslatorSettings,
    error::TranslateError,
    operator::OperatorTable,
    query::sink::PredicateSink,
    rule::{Connective, FieldAllowList, RawRule, RuleGroup, RuleNode},
    translate::{
        coercer::Coercer,
        emitter::emit,
        params::ParamNames,
        stage::StagedPredicates,
        validator::{ensure_field_allowed, is_safe_identifier, validate_rule},
    },
};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

/// Turns a query-builder rule payload into predicates on a [`PredicateSink`].
///
/// Holds no per-call state: the allow-list, placeholder counter and sink are
/// all owned by the call, so one translator can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RuleTranslator<'t> {
    operators: &'t OperatorTable,
    settings: TranslatorSettings,
}

impl Default for RuleTranslator<'static> {
    fn default() -> Self {
        RuleTranslator::new(OperatorTable::standard(), TranslatorSettings::default())
    }
}

impl<'t> RuleTranslator<'t> {
    pub fn new(operators: &'t OperatorTable, settings: TranslatorSettings) -> Self {
        Self {
            operators,
            settings,
        }
    }

    pub fn operators(&self) -> &OperatorTable {
        self.operators
    }

    /// Decodes `payload` and attaches its predicates to `sink`.
    ///
    /// A payload without rules returns the sink unchanged. Malformed rules are
    /// skipped. On error nothing has been added to the sink. Generated
    /// placeholder names never repeat one the sink already has bound.
    pub fn translate<S: PredicateSink>(
        &self,
        payload: &str,
        sink: S,
        fields: Option<&FieldAllowList>,
    ) -> Result<S, TranslateError> {
        let payload: JsonValue = serde_json::from_str(payload)?;
        self.translate_json(&payload, sink, fields)
    }

    pub fn translate_json<S: PredicateSink>(
        &self,
        payload: &JsonValue,
        mut sink: S,
        fields: Option<&FieldAllowList>,
    ) -> Result<S, TranslateError> {
        let Some(root) = RuleGroup::from_json(payload) else {
            debug!("Payload has no rules, leaving query unchanged");
            return Ok(sink);
        };

        let condition = self.condition_of(&root)?;
        let mut stage = StagedPredicates::default();
        Walk {
            translator: self,
            fields,
            reserved: &sink,
            params: ParamNames::new(&self.settings.param_prefix),
        }
        .group(&root, condition, &mut stage)?;

        debug!(
            params = stage.parameter_count(),
            "Committing translated predicates"
        );
        stage.commit(&mut sink);
        Ok(sink)
    }

    fn condition_of(&self, group: &RuleGroup) -> Result<Connective, TranslateError> {
        match &group.condition {
            Some(condition) => condition.parse(),
            None => Ok(self.settings.default_condition),
        }
    }
}

/// State of one translation call.
struct Walk<'w, 't> {
    translator: &'w RuleTranslator<'t>,
    fields: Option<&'w FieldAllowList>,
    /// The caller's sink, consulted for placeholder names already in use.
    reserved: &'w dyn PredicateSink,
    params: ParamNames,
}

impl Walk<'_, '_> {
    fn group(
        &mut self,
        group: &RuleGroup,
        condition: Connective,
        stage: &mut StagedPredicates,
    ) -> Result<(), TranslateError> {
        for node in &group.rules {
            match node {
                RuleNode::Leaf(raw) => self.leaf(raw, condition, stage)?,
                RuleNode::Group(nested) => {
                    let nested_condition = self.translator.condition_of(nested)?;
                    debug!(
                        condition = %nested_condition,
                        rules = nested.rules.len(),
                        "Entering nested group"
                    );

                    let mut inner = StagedPredicates::default();
                    self.group(nested, nested_condition, &mut inner)?;
                    inner.attach_to(stage, nested_condition, condition);
                }
            }
        }
        Ok(())
    }

    fn leaf(
        &mut self,
        raw: &RawRule,
        connective: Connective,
        stage: &mut StagedPredicates,
    ) -> Result<(), TranslateError> {
        let operators = self.translator.operators;

        let rule = match validate_rule(raw, operators) {
            Ok(rule) => rule,
            Err(reason) => {
                warn!(rule = %raw.display_id(), %reason, "Skipping rule");
                return Ok(());
            }
        };

        ensure_field_allowed(rule.field, self.fields)?;
        if self.fields.is_none() && !is_safe_identifier(rule.field) {
            return Err(TranslateError::InvalidField {
                field: rule.field.to_string(),
            });
        }

        let (spec, value) = Coercer::new(operators, &self.translator.settings).coerce(&rule)?;

        let reserved = self.reserved;
        emit(
            stage,
            rule.field,
            spec,
            value,
            connective,
            &mut self.params,
            &|name: &str| reserved.has_parameter(name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterQuery;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_skipped_rule_is_logged() {
        let payload = r#"{"condition": "AND", "rules": [
            {"id": "broken", "field": "age", "operator": "equal", "value": 1},
            {"id": "ok", "field": "age", "type": "integer", "input": "number", "operator": "equal", "value": 1}
        ]}"#;

        let query = RuleTranslator::default()
            .translate(payload, FilterQuery::new(), None)
            .unwrap();

        assert_eq!(query.to_string(), "age = :p0");
        assert!(logs_contain("Skipping rule"));
        assert!(logs_contain("missing required key 'type'"));
    }

    #[test]
    fn test_invalid_root_condition_is_fatal() {
        let payload = r#"{"condition": "XOR", "rules": [
            {"id": "a", "field": "a", "type": "string", "input": "text", "operator": "equal", "value": "x"}
        ]}"#;

        let err = RuleTranslator::default()
            .translate(payload, FilterQuery::new(), None)
            .unwrap_err();
        assert!(matches!(err, TranslateError::InvalidCondition(c) if c == "XOR"));
    }

    #[test]
    fn test_unsafe_field_without_allow_list_is_fatal() {
        let payload = r#"{"rules": [
            {"id": "a", "field": "a = a OR 1", "type": "string", "input": "text", "operator": "is_null", "value": null}
        ]}"#;

        let err = RuleTranslator::default()
            .translate(payload, FilterQuery::new(), None)
            .unwrap_err();
        assert!(matches!(err, TranslateError::InvalidField { .. }));
    }

    #[test]
    fn test_settings_prefix_and_default_condition() {
        let settings = TranslatorSettings {
            param_prefix: "qb".into(),
            default_condition: Connective::Or,
            ..TranslatorSettings::default()
        };
        let translator = RuleTranslator::new(OperatorTable::standard(), settings);
        let payload = r#"{"rules": [
            {"id": "a", "field": "a", "type": "integer", "input": "number", "operator": "equal", "value": 1},
            {"id": "b", "field": "b", "type": "integer", "input": "number", "operator": "equal", "value": 2},
            {"id": "c", "field": "c", "type": "integer", "input": "number", "operator": "equal", "value": 3}
        ]}"#;

        let query = translator
            .translate(payload, FilterQuery::new(), None)
            .unwrap();
        assert_eq!(query.to_string(), "a = :qb0 OR b = :qb1 OR c = :qb2");
    }
}
