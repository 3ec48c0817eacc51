//! Cardinality and type constraints over path results.
//!
//! A constraint reads `type:min-max`:
//!
//! ```text
//! s:2-3   two or three strings
//! n:1-1   exactly one number
//! o:0-*   any number of lists
//! b:*-1   at most one boolean
//! ```
//!
//! `type` is one of `s` (string), `n` (number), `b` (boolean) or `o` (list).
//! Bounds are inclusive; `*` removes the bound on its side.

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{
    path::{Path, PathError},
    scanner::is_integer,
    tree::View,
    value::NodeType,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("malformed constraint: {0}")]
    MalformedConstraint(String),
}

fn malformed(reason: impl Into<String>) -> ConstraintError {
    ConstraintError::MalformedConstraint(reason.into())
}

/// Errors from [`check`]: either input expression may be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Inclusive bounds on a result count. `max == None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: usize,
    pub max: Option<usize>,
}

impl Cardinality {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// A compiled `type:min-max` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub expected: NodeType,
    pub cardinality: Cardinality,
}

impl Constraint {
    /// True iff the count is within bounds and every result has the
    /// expected type.
    pub fn matches(&self, results: &[View<'_>]) -> bool {
        self.cardinality.contains(results.len())
            && results.iter().all(|view| view.node_type() == self.expected)
    }
}

fn parse_type(text: &str) -> Result<NodeType, ConstraintError> {
    match text {
        "s" => Ok(NodeType::String),
        "n" => Ok(NodeType::Number),
        "b" => Ok(NodeType::Boolean),
        "o" => Ok(NodeType::List),
        _ => Err(malformed(format!(
            "type '{}' must be one letter among 's', 'n', 'b', 'o'",
            text
        ))),
    }
}

fn type_letter(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::String => "s",
        NodeType::Number => "n",
        NodeType::Boolean => "b",
        NodeType::List => "o",
        NodeType::None => "?",
    }
}

fn parse_bound(text: &str) -> Result<Option<usize>, ConstraintError> {
    if text == "*" {
        return Ok(None);
    }
    if !is_integer(text) {
        return Err(malformed(format!(
            "bound '{}' must be an integer or '*'",
            text
        )));
    }
    text.parse::<usize>()
        .map(Some)
        .map_err(|_| malformed(format!("bound '{}' is too large", text)))
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.matches(':').count() != 1 {
            return Err(malformed("constraint must contain exactly one ':'"));
        }
        let (kind, interval) = s.split_once(':').unwrap_or_default();

        if interval.matches('-').count() != 1 {
            return Err(malformed("the interval must contain exactly one '-'"));
        }
        let (min, max) = interval.split_once('-').unwrap_or_default();

        let expected = parse_type(kind)?;
        let min = parse_bound(min)?.unwrap_or(0);
        let max = parse_bound(max)?;

        if max.is_some_and(|max| min > max) {
            return Err(malformed("the interval min must not exceed max"));
        }

        Ok(Constraint {
            expected,
            cardinality: Cardinality { min, max },
        })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-",
            type_letter(self.expected),
            self.cardinality.min
        )?;
        match self.cardinality.max {
            Some(max) => write!(f, "{}", max),
            None => f.write_str("*"),
        }
    }
}

/// Resolve `path` below `from` and validate the results against `constraint`.
///
/// Returns `Ok(false)` for a failed validation; errors are reserved for
/// malformed path or constraint expressions.
///
/// # Examples
///
/// ```
/// use clon_lang::{check, parse};
///
/// let tree = parse(r#"(log (level "info") (level "fatal"))"#).unwrap();
///
/// assert!(check("level:*", "s:2-3", tree.root()).unwrap());
/// assert!(!check("level:*", "n:2-3", tree.root()).unwrap());
/// assert!(check("level:*", "s:2", tree.root()).is_err());
/// ```
pub fn check(path: &str, constraint: &str, from: View<'_>) -> Result<bool, CheckError> {
    let path: Path = path.parse()?;
    let constraint: Constraint = constraint.parse()?;

    let results = path.get_all(from);
    let valid = constraint.matches(&results);

    debug!(%path, %constraint, results = results.len(), valid, "checked constraint");
    Ok(valid)
}
