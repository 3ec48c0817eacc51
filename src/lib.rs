//! # CLON
//!
//! Parser, arena tree, path queries and constraint checks for CLON, a small
//! parenthesized notation where every value is named and typed:
//!
//! ```text
//! (log
//!   (level "info")
//!   (code 12)
//!   (sent true)
//!   (tags (tag "a") (tag "b")))
//! ```
//!
//! ```
//! use clon_lang::{check, get, get_all, parse};
//!
//! let tree = parse("(log (level 12) (level 13))").unwrap();
//!
//! assert_eq!(get("level:1", tree.root()).unwrap().as_number(), Some(13.0));
//! assert_eq!(get_all("level:*", tree.root()).unwrap().len(), 2);
//! assert!(check("level:*", "n:1-*", tree.root()).unwrap());
//! ```

pub mod builder;
pub mod constraint;
pub mod output;
pub mod parser;
pub mod path;
pub mod scanner;
pub mod tree;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use builder::{BuildError, Builder, Scalar};
pub use constraint::{Cardinality, CheckError, Constraint, ConstraintError, check};
pub use output::{to_clon, to_clon_pretty};
pub use parser::{Expected, ParseError, Parser, parse};
pub use path::{Path, PathError, Segment, Selector};
pub use scanner::{Scanner, Symbol};
pub use tree::{Children, NO_LINK, Node, Span, Tree, View};
pub use value::{NodeType, Value};

/// First match of `path` below `from`; the undefined view on a miss.
pub fn get<'a>(path: &str, from: View<'a>) -> Result<View<'a>, PathError> {
    from.get(path)
}

/// Every match of `path` below `from`, expanding wildcards.
pub fn get_all<'a>(path: &str, from: View<'a>) -> Result<Vec<View<'a>>, PathError> {
    from.get_all(path)
}
