use crate::error::CliError;
use rule_translator::{OperatorTable, Value, operator::ValueArity};
use serde::Serialize;

#[derive(Serialize)]
struct TranslationReport<'a> {
    sql: &'a str,
    params: Vec<ParamReport<'a>>,
}

#[derive(Serialize)]
struct ParamReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    value: &'a Value,
}

/// Prints the translated expression followed by its parameters.
///
/// `names` is empty for positional dialects.
pub fn print_translation(
    sql: &str,
    names: &[&str],
    params: &[Value],
    as_json: bool,
) -> Result<(), CliError> {
    if as_json {
        let report = TranslationReport {
            sql,
            params: params
                .iter()
                .enumerate()
                .map(|(i, value)| ParamReport {
                    name: names.get(i).copied(),
                    value,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if sql.is_empty() {
        println!("(no predicates)");
        return Ok(());
    }

    println!("{sql}");
    for (i, value) in params.iter().enumerate() {
        match names.get(i) {
            Some(name) => println!("{:<8} {}", format!(":{name}"), value),
            None => println!("{:<8} {}", format!("#{}", i + 1), value),
        }
    }
    Ok(())
}

pub fn print_operators(table: &OperatorTable, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&table.specs())?);
        return Ok(());
    }

    println!("{:<18} {:<12} {:<8} {}", "Operator", "SQL", "Arity", "Affix");
    println!("{}", "-".repeat(48));
    for spec in table.specs() {
        let arity = match spec.arity() {
            ValueArity::None => "none",
            ValueArity::Scalar => "scalar",
            ValueArity::List => "list",
            ValueArity::Pair => "pair",
        };
        let affix = if spec.affix.is_none() {
            String::new()
        } else {
            spec.affix.apply("…")
        };
        println!("{:<18} {:<12} {:<8} {}", spec.name, spec.sql, arity, affix);
    }
    Ok(())
}
