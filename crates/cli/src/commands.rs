use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a rule payload into a WHERE expression
    Translate {
        #[arg(long, help = "Payload file path, or '-' to read stdin")]
        payload: String,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated list of fields rules may reference"
        )]
        fields: Option<Vec<String>>,

        #[arg(long, value_enum, default_value_t = DialectKind::Named)]
        dialect: DialectKind,

        #[arg(long, help = "Translator settings file (JSON)")]
        settings: Option<String>,

        #[arg(
            long,
            help = "If set, prints the SQL and parameters as JSON instead of text"
        )]
        json: bool,
    },
    /// List the supported operators
    Operators {
        #[arg(long, help = "If set, prints the operator table as JSON")]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    /// `:name` placeholders, unquoted identifiers
    Named,
    /// `$n` placeholders, double-quoted identifiers
    Postgres,
    /// `?` placeholders, backtick-quoted identifiers
    Mysql,
}
