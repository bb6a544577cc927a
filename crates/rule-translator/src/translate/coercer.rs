//! Normalizes a rule's raw JSON value into what its operator binds.

use crate::{
    config::TranslatorSettings,
    error::TranslateError,
    operator::{OperatorSpec, OperatorTable, ValueArity},
    translate::validator::Rule,
    value::Value,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value as JsonValue;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// The value shape handed to the emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// Null-check operators.
    Null,
    /// `is_empty` / `is_not_empty`: the empty string.
    Blank,
    Scalar(Value),
    List(Vec<Value>),
}

/// The rule `type` vocabulary of the query builder widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Integer,
    Double,
    Boolean,
    Date,
    Time,
    DateTime,
    /// Unknown types, or coercion switched off: JSON scalars pass through.
    Untyped,
}

impl ValueType {
    pub fn from_rule_type(ty: &str) -> Self {
        match ty.to_ascii_lowercase().as_str() {
            "string" => ValueType::String,
            "integer" => ValueType::Integer,
            "double" => ValueType::Double,
            "boolean" => ValueType::Boolean,
            "date" => ValueType::Date,
            "time" => ValueType::Time,
            "datetime" => ValueType::DateTime,
            _ => ValueType::Untyped,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::Boolean => "boolean",
            ValueType::Date => "date (YYYY-MM-DD)",
            ValueType::Time => "time (HH:MM[:SS])",
            ValueType::DateTime => "datetime",
            ValueType::Untyped => "scalar",
        }
    }
}

pub struct Coercer<'a> {
    operators: &'a OperatorTable,
    settings: &'a TranslatorSettings,
}

impl<'a> Coercer<'a> {
    pub fn new(operators: &'a OperatorTable, settings: &'a TranslatorSettings) -> Self {
        Self {
            operators,
            settings,
        }
    }

    /// Resolves the rule's operator and shapes its value for it.
    pub fn coerce(
        &self,
        rule: &Rule,
    ) -> Result<(&'a OperatorSpec, CoercedValue), TranslateError> {
        let spec = self
            .operators
            .get(rule.operator)
            .ok_or_else(|| TranslateError::UnknownOperator {
                field: rule.field.to_string(),
                operator: rule.operator.to_string(),
            })?;

        if !spec.accepts_value {
            let value = if spec.is_blank_check() {
                CoercedValue::Blank
            } else {
                CoercedValue::Null
            };
            return Ok((spec, value));
        }

        let ty = if self.settings.coerce_types {
            ValueType::from_rule_type(rule.ty)
        } else {
            ValueType::Untyped
        };

        let value = if spec.requires_array() {
            self.coerce_list(rule, spec, ty)?
        } else {
            self.coerce_scalar(rule, spec, ty)?
        };
        Ok((spec, value))
    }

    fn coerce_list(
        &self,
        rule: &Rule,
        spec: &OperatorSpec,
        ty: ValueType,
    ) -> Result<CoercedValue, TranslateError> {
        let items = match rule.value {
            JsonValue::Array(items) => items.clone(),
            JsonValue::String(s) => self.split(s),
            other => return Err(arity_mismatch(rule, spec, json_kind(other))),
        };

        let count_ok = match spec.arity() {
            ValueArity::Pair => items.len() == 2,
            _ => !items.is_empty(),
        };
        if !count_ok {
            return Err(arity_mismatch(rule, spec, &format!("{} values", items.len())));
        }

        let values = items
            .iter()
            .map(|item| typed(rule.field, ty, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CoercedValue::List(values))
    }

    fn coerce_scalar(
        &self,
        rule: &Rule,
        spec: &OperatorSpec,
        ty: ValueType,
    ) -> Result<CoercedValue, TranslateError> {
        if rule.value.is_array() {
            return Err(arity_mismatch(rule, spec, "an array"));
        }

        if spec.affix.is_none() {
            return Ok(CoercedValue::Scalar(typed(rule.field, ty, rule.value)?));
        }

        // LIKE patterns are always text
        let text = match rule.value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            other => return Err(invalid_value(rule.field, "text", other)),
        };
        Ok(CoercedValue::Scalar(Value::String(spec.affix.apply(&text))))
    }

    /// An empty string splits into no elements at all.
    fn split(&self, s: &str) -> Vec<JsonValue> {
        if s.trim().is_empty() {
            return vec![];
        }
        s.split(self.settings.list_delimiter.as_str())
            .map(|part| {
                let part = if self.settings.trim_list_items {
                    part.trim()
                } else {
                    part
                };
                JsonValue::String(part.to_string())
            })
            .collect()
    }
}

fn typed(field: &str, ty: ValueType, value: &JsonValue) -> Result<Value, TranslateError> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    let converted = match (ty, value) {
        (ValueType::String | ValueType::Untyped, v) => Value::from_json_scalar(v),
        (ValueType::Integer, JsonValue::Number(n)) => n.as_i64().map(Value::Int),
        (ValueType::Integer, JsonValue::String(s)) => s.trim().parse().ok().map(Value::Int),
        (ValueType::Double, JsonValue::Number(n)) => n.as_f64().map(Value::Float),
        (ValueType::Double, JsonValue::String(s)) => s.trim().parse().ok().map(Value::Float),
        (ValueType::Boolean, JsonValue::Bool(b)) => Some(Value::Boolean(*b)),
        (ValueType::Boolean, JsonValue::Number(n)) => match n.as_i64() {
            Some(1) => Some(Value::Boolean(true)),
            Some(0) => Some(Value::Boolean(false)),
            _ => None,
        },
        (ValueType::Boolean, JsonValue::String(s)) => parse_bool(s).map(Value::Boolean),
        (ValueType::Date, JsonValue::String(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .ok()
            .map(Value::Date),
        (ValueType::Time, JsonValue::String(s)) => parse_time(s.trim()).map(Value::Time),
        (ValueType::DateTime, JsonValue::String(s)) => parse_datetime(s.trim()).map(Value::Timestamp),
        _ => None,
    };

    converted.ok_or_else(|| invalid_value(field, ty.describe(), value))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

fn arity_mismatch(rule: &Rule, spec: &OperatorSpec, found: &str) -> TranslateError {
    TranslateError::ValueArityMismatch {
        field: rule.field.to_string(),
        operator: rule.operator.to_string(),
        expected: spec.arity().describe().to_string(),
        found: found.to_string(),
    }
}

fn invalid_value(field: &str, expected: &str, value: &JsonValue) -> TranslateError {
    TranslateError::InvalidValue {
        field: field.to_string(),
        expected: expected.to_string(),
        value: value.to_string(),
    }
}
