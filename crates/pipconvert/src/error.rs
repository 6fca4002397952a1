//! Errors raised while converting a Pipfile.

use std::path::PathBuf;

use thiserror::Error;

/// An error raised by the conversion pipeline.
///
/// Every variant is fatal: the pipeline never retries and never writes a
/// partial `pyproject.toml`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No Pipfile found at `{}`", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse Pipfile")]
    Parse(#[source] toml::de::Error),

    #[error("Invalid specification for package `{package}`: {reason}")]
    MalformedVersionSpec { package: String, reason: String },

    /// The URL itself is left out of the message since it may carry credentials.
    #[error("Invalid URL for source `{name}`")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Multiple sources map to the index name `{0}`")]
    DuplicateIndex(String),

    #[error("Failed to serialize pyproject.toml")]
    Serialize(#[from] toml::ser::Error),

    #[error("Expected an `index = \"...\"` line after `{header}` (line {line})")]
    UnmatchedRewritePattern { line: usize, header: String },

    #[error("`{header}` (line {line}) is separated from the other `[tool.uv.sources]` entries")]
    SplitSourcesTable { line: usize, header: String },
}
