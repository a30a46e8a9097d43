use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AnnotatorError {
    #[error("config file not found: {0}")]
    MissingConfig(Utf8PathBuf),

    #[error("failed to read config file at {0}")]
    ConfigRead(Utf8PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    #[error("failed to read input file at {0}")]
    InputRead(Utf8PathBuf),

    #[error("failed to parse {kind} input: {message}")]
    #[diagnostic(help("input must be a Reactome content-service JSON object"))]
    InputParse { kind: String, message: String },

    #[error("failed to write output: {0}")]
    Output(String),
}
