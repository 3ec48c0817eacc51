//! CLI support for clon-lang
//!
//! Each command is exposed as an options struct plus an `execute_*` function
//! so the same behaviour can be driven without clap.

mod check;
mod convert;
mod docs;
mod format;
mod logging;
mod query;

pub use check::{CheckOptions, execute_check};
pub use convert::{clon_to_json, execute_json, value_to_json};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use format::{FormatOptions, execute_format};
pub use logging::init_logging;
pub use query::{GetOptions, execute_get};

use std::io;

use thiserror::Error;

use crate::{CheckError, ParseError, PathError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("No input provided. Use --input or pipe CLON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'clon docs' to see available categories.")]
    UnknownCategory(String),
}

pub(crate) fn require_input(input: Option<&str>) -> Result<&str, CliError> {
    input.ok_or(CliError::NoInput)
}
