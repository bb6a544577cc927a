use crate::{
    error::TranslateError,
    operator::{OperatorSpec, ValueArity},
    query::{
        expr::{FilterExpr, Operand, Predicate},
        sink::PredicateSink,
    },
    rule::Connective,
    translate::{coercer::CoercedValue, params::ParamNames},
    value::Value,
};

/// Appends one comparison for `field` to `sink` and binds its values.
///
/// The predicate and its bindings are built in full before the sink is
/// touched, so a mismatch between operator and value leaves the sink as it was.
/// Placeholder names for which `reserved` holds are never generated.
pub fn emit<S: PredicateSink>(
    sink: &mut S,
    field: &str,
    spec: &OperatorSpec,
    value: CoercedValue,
    connective: Connective,
    params: &mut ParamNames,
    reserved: &dyn Fn(&str) -> bool,
) -> Result<(), TranslateError> {
    let mut bindings: Vec<(String, Value)> = Vec::new();
    let mut bind = |value: Value| {
        let name = params.next_name(reserved);
        bindings.push((name.clone(), value));
        name
    };

    let operand = match (spec.arity(), value) {
        (ValueArity::None, _) if spec.is_null_check() => Operand::None,
        (ValueArity::None, _) => Operand::Blank,
        (ValueArity::Scalar, CoercedValue::Scalar(v)) => Operand::Param(bind(v)),
        (ValueArity::Pair, CoercedValue::List(vs)) => match <[Value; 2]>::try_from(vs) {
            Ok([low, high]) => Operand::Range(bind(low), bind(high)),
            Err(vs) => {
                return Err(mismatch(field, spec, ValueArity::Pair, &CoercedValue::List(vs)));
            }
        },
        (ValueArity::List, CoercedValue::List(vs)) if !vs.is_empty() => {
            Operand::List(vs.into_iter().map(&mut bind).collect())
        }
        (arity, other) => return Err(mismatch(field, spec, arity, &other)),
    };

    sink.add_predicate(
        FilterExpr::leaf(Predicate {
            field: field.to_string(),
            operator: spec.sql,
            operand,
        }),
        connective,
    );
    for (name, value) in bindings {
        sink.bind_parameter(&name, value);
    }

    Ok(())
}

fn mismatch(
    field: &str,
    spec: &OperatorSpec,
    arity: ValueArity,
    value: &CoercedValue,
) -> TranslateError {
    TranslateError::ValueArityMismatch {
        field: field.to_string(),
        operator: spec.name.to_string(),
        expected: arity.describe().to_string(),
        found: describe(value),
    }
}

fn describe(value: &CoercedValue) -> String {
    match value {
        CoercedValue::Null => "null".into(),
        CoercedValue::Blank => "an empty string".into(),
        CoercedValue::Scalar(_) => "a single value".into(),
        CoercedValue::List(vs) => format!("{} values", vs.len()),
    }
}
