use thiserror::Error;

/// Errors that abort a whole translation.
///
/// None of these leave predicates behind in the caller's sink: the walk is
/// staged and only committed once every rule has been processed.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to decode rule payload as JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Field ({field}) does not exist in fields list")]
    FieldNotAllowed { field: String },

    #[error("Field ({field}) is not a valid identifier")]
    InvalidField { field: String },

    #[error("Unknown operator '{operator}' for field '{field}'")]
    UnknownOperator { field: String, operator: String },

    #[error("Field ({field}) with operator '{operator}' expects {expected}, got {found}")]
    ValueArityMismatch {
        field: String,
        operator: String,
        expected: String,
        found: String,
    },

    #[error("Field ({field}) value {value} is not a valid {expected}")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Condition can only be one of: 'and', 'or' (got '{0}')")]
    InvalidCondition(String),
}

/// Why a single rule was left out of the translation.
///
/// A skip never stops the walk; sibling rules are still translated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSkip {
    #[error("rule is not a JSON object")]
    NotAnObject,

    #[error("rule is missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("rule key '{0}' must be a string")]
    InvalidKey(&'static str),

    #[error("operator '{0}' is not recognized")]
    UnknownOperator(String),
}

/// Errors raised while loading translator settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}

/// Errors raised when rendering accumulated predicates for a dialect.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Placeholder ':{0}' has no bound value")]
    UnboundParameter(String),
}
