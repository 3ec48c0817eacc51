//! Reformat CLON documents

use super::{CliError, require_input};
use crate::{output::ClonPrinter, parse};

/// Options shared by the fmt and json commands
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// CLON input text
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Parse the input and serialize it back, normalising whitespace.
pub fn execute_format(options: &FormatOptions) -> Result<String, CliError> {
    let text = require_input(options.input.as_deref())?;
    let tree = parse(text)?;
    Ok(ClonPrinter::new(options.pretty).print(tree.root()))
}
