use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Failure reported by the completion provider, passed through untouched.
    #[error(transparent)]
    Generation(anyhow::Error),

    #[error("Input error: {0}")]
    Input(#[from] dialoguer::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Missing value for placeholder `{0}`")]
    MissingVariable(String),

    #[error("Unclosed placeholder starting at byte {0}")]
    Unclosed(usize),

    #[error("Unmatched `}}` at byte {0}")]
    UnmatchedClose(usize),
}
