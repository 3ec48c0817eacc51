//! Validate CLON documents against path constraints

use tracing::info;

use super::{CliError, require_input};
use crate::parse;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Path expression selecting the nodes to validate
    pub path: String,
    /// `type:min-max` constraint
    pub constraint: String,
    /// CLON input text
    pub input: Option<String>,
}

/// Execute a clon check operation.
///
/// `Ok(false)` means the document was read and the constraint does not hold.
pub fn execute_check(options: &CheckOptions) -> Result<bool, CliError> {
    let text = require_input(options.input.as_deref())?;
    let tree = parse(text)?;

    let valid = tree.check(&options.path, &options.constraint)?;
    info!(path = %options.path, constraint = %options.constraint, valid, "check finished");
    Ok(valid)
}
