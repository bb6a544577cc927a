use rule_translator::{RenderError, SettingsError, TranslateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the payload: {0}")]
    PayloadRead(#[from] std::io::Error),

    #[error("Failed to load translator settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to translate the payload: {0}")]
    Translate(#[from] TranslateError),

    #[error("Failed to render the query: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
