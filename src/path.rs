//! # Path Expressions
//!
//! A path navigates a [`Tree`](crate::Tree) by node name, starting from the
//! children of the node it is resolved against:
//!
//! ```text
//! path     := segment ('.' segment)*
//! segment  := name (':' selector)?
//! selector := digits | '*'
//! ```
//!
//! - `level` is the first child named `level` (same as `level:0`)
//! - `level:2` is the third child named `level`
//! - `level:*` is every child named `level`
//!
//! Two resolution modes exist. [`Path::get`] commits to a single branch and
//! returns the undefined view on a miss; a wildcard there behaves like `:0`.
//! [`Path::get_all`] expands every wildcard and returns all matches, as the
//! cross-product of the wildcard segments, in document order.
//!
//! ```text
//! (root
//!   (log (level 1) (level 2))
//!   (log (level 3)))
//!
//! log:*.level:*  →  1, 2, 3
//! log:1.level    →  3
//! log.level:1    →  2
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    scanner::{is_integer, is_name},
    tree::View,
};

/// Errors raised while compiling a path expression.
///
/// All three variants are malformed paths; the last two narrow down which
/// part of a segment was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// Segment name is not `[a-z]+`
    #[error("malformed path: malformed name '{0}'")]
    MalformedName(String),

    /// Selector is neither a non-negative integer nor `*`
    #[error("malformed path: malformed number '{0}'")]
    MalformedNumber(String),
}

/// Which same-named siblings a segment selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The n-th occurrence, counting from 0
    Index(usize),
    /// Every occurrence
    All,
}

impl Selector {
    /// The single occurrence [`Path::get`] follows
    pub fn first_index(&self) -> usize {
        match self {
            Selector::Index(n) => *n,
            Selector::All => 0,
        }
    }
}

impl FromStr for Selector {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Selector::All);
        }
        if !is_integer(s) {
            return Err(PathError::MalformedNumber(s.to_string()));
        }
        s.parse::<usize>()
            .map(Selector::Index)
            .map_err(|_| PathError::MalformedNumber(s.to_string()))
    }
}

/// One `name[:selector]` step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub selector: Selector,
}

impl FromStr for Segment {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let selector = parts.next();

        if parts.next().is_some() {
            return Err(PathError::MalformedPath(format!(
                "more than one ':' in segment '{}'",
                s
            )));
        }
        if name.is_empty() {
            return Err(PathError::MalformedPath(format!(
                "empty name in segment '{}'",
                s
            )));
        }
        if !is_name(name) {
            return Err(PathError::MalformedName(name.to_string()));
        }

        let selector = match selector {
            Some(text) => text.parse()?,
            None => Selector::Index(0),
        };

        Ok(Segment {
            name: name.to_string(),
            selector,
        })
    }
}

/// A compiled path expression.
///
/// # Examples
///
/// ```
/// use clon_lang::{Path, parse};
///
/// let tree = parse("(log (level 12) (level 13))").unwrap();
/// let path: Path = "level:*".parse().unwrap();
///
/// let levels: Vec<_> = path.get_all(tree.root()).iter().map(|v| v.raw_text()).collect();
/// assert_eq!(levels, ["12", "13"]);
/// assert_eq!(path.get(tree.root()).raw_text(), "12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether any segment is a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| s.selector == Selector::All)
    }

    /// Follow one branch and return the node it ends on.
    ///
    /// Never fails: a missing child, or a scalar reached before the last
    /// segment, yields the undefined view.
    pub fn get<'a>(&self, from: View<'a>) -> View<'a> {
        let mut current = from;

        for segment in &self.segments {
            let wanted = segment.selector.first_index();
            let found = current
                .children()
                .filter(|child| child.name() == segment.name)
                .nth(wanted);

            match found {
                Some(child) => current = child,
                None => {
                    trace!(path = %self, segment = %segment, "no match");
                    return from.tree().undefined();
                }
            }
        }

        current
    }

    /// Every node the path reaches, expanding wildcards.
    pub fn get_all<'a>(&self, from: View<'a>) -> Vec<View<'a>> {
        let mut results = Vec::new();
        explore(&self.segments, from, &mut results);
        debug!(path = %self, results = results.len(), "resolved path");
        results
    }
}

fn explore<'a>(segments: &[Segment], view: View<'a>, results: &mut Vec<View<'a>>) {
    let Some((segment, rest)) = segments.split_first() else {
        if !view.is_undefined() {
            results.push(view);
        }
        return;
    };

    let mut matches = view
        .children()
        .filter(|child| child.name() == segment.name);

    match segment.selector {
        Selector::Index(n) => {
            if let Some(child) = matches.nth(n) {
                explore(rest, child, results);
            }
        }
        Selector::All => {
            for child in matches {
                explore(rest, child, results);
            }
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::MalformedPath("empty path".to_string()));
        }

        let segments = s
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<Segment>, _>>()?;

        Ok(Path { segments })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(n) => write!(f, "{}", n),
            Selector::All => f.write_str("*"),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.selector)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
