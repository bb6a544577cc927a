use crate::{
    commands::{Commands, DialectKind},
    error::CliError,
};
use clap::Parser;
use rule_translator::{
    FieldAllowList, FilterQuery, OperatorTable, RuleTranslator, TranslatorSettings, Value,
    query::dialect::{Dialect, MySql, Postgres},
};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "qbrules",
    version = "0.1.0",
    about = "Query builder rule translator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            payload,
            fields,
            dialect,
            settings,
            json,
        } => {
            let source = read_payload(&payload).await?;
            let settings = match settings {
                Some(path) => {
                    info!("Loading translator settings from {path}");
                    TranslatorSettings::from_json_str(&tokio::fs::read_to_string(&path).await?)?
                }
                None => TranslatorSettings::default(),
            };
            let fields = fields.map(FieldAllowList::new);

            let translator = RuleTranslator::new(OperatorTable::standard(), settings);
            let query = translator.translate(&source, FilterQuery::new(), fields.as_ref())?;
            info!(
                predicates = query.expr.as_ref().map_or(0, |e| e.predicates().len()),
                params = query.params.len(),
                "Translated payload"
            );

            print_query(&query, dialect, json)?;
        }
        Commands::Operators { json } => {
            output::print_operators(OperatorTable::standard(), json)?;
        }
    }

    Ok(())
}

async fn read_payload(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        tokio::io::stdin().read_to_string(&mut source).await?;
        Ok(source)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

fn print_query(query: &FilterQuery, dialect: DialectKind, as_json: bool) -> Result<(), CliError> {
    let dialect: &dyn Dialect = match dialect {
        DialectKind::Named => {
            let names = query
                .expr
                .as_ref()
                .map(|e| e.parameters())
                .unwrap_or_default();
            let params = names
                .iter()
                .map(|name| query.parameter(name).cloned().unwrap_or(Value::Null))
                .collect::<Vec<_>>();
            return output::print_translation(&query.to_string(), &names, &params, as_json);
        }
        DialectKind::Postgres => &Postgres,
        DialectKind::Mysql => &MySql,
    };

    info!(dialect = %dialect.name(), "Rendering query");
    let (sql, params) = query.render(dialect)?;
    output::print_translation(&sql, &[], &params, as_json)
}
