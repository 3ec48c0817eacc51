//! Resolve path expressions against CLON input

use super::{CliError, require_input};
use crate::{output::ClonPrinter, parse};

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Path expression to resolve
    pub path: String,
    /// CLON input text
    pub input: Option<String>,
    /// Return every match instead of the first
    pub all: bool,
    /// Pretty-print the matched nodes
    pub pretty: bool,
}

/// Execute a clon get operation, returning each match serialized.
///
/// An empty result means the path is well-formed but nothing matched.
pub fn execute_get(options: &GetOptions) -> Result<Vec<String>, CliError> {
    let text = require_input(options.input.as_deref())?;
    let tree = parse(text)?;
    let printer = ClonPrinter::new(options.pretty);

    let matches = if options.all {
        tree.get_all(&options.path)?
    } else {
        let found = tree.get(&options.path)?;
        if found.is_undefined() { vec![] } else { vec![found] }
    };

    Ok(matches.into_iter().map(|view| printer.print(view)).collect())
}
