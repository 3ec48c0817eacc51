//! # CLON Document Tree
//!
//! A parsed document is a single [`Tree`]: the source text it was parsed from
//! plus a flat, append-only arena of [`Node`]s. Nodes refer to each other by
//! integer index, never by pointer:
//!
//! - `child` is the index of the first child of a list node
//! - `next` is the index of the following sibling under the same parent
//! - [`NO_LINK`] marks a missing link
//!
//! ## Arena Layout
//!
//! Nodes are stored in pre-order. A list node is immediately followed by its
//! whole subtree, then by its next sibling:
//!
//! ```text
//! (log (level 12) (level 13))
//!
//! index  name   value   child  next
//! 0      log    List    1      -
//! 1      level  12      -      2
//! 2      level  13      -      -
//! ```
//!
//! Index 0 is always the document root.
//!
//! ## Text Spans
//!
//! Names and raw value text are stored as [`Span`]s into the owned source
//! buffer, so nothing in a node points into the node array itself and the
//! arena can grow freely while parsing.
//!
//! ## Traversal
//!
//! Reading goes through [`View`], a copyable `(tree, index)` cursor. A view
//! whose index is [`NO_LINK`] is the undefined view returned by failed
//! lookups: its type is [`NodeType::None`](crate::NodeType::None) and its name
//! is empty.

mod view;

pub use view::{Children, View};

use std::str::FromStr;

use crate::{
    constraint::CheckError,
    parser::{self, ParseError},
    path::PathError,
    value::Value,
};

/// Sentinel index meaning "no next sibling", "no child" or "no node".
pub const NO_LINK: usize = usize::MAX;

/// Byte range into a tree's source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const EMPTY: Span = Span { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the span against `text`. Out-of-range spans resolve to `""`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

/// One parsed unit: `(name value)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Node name, always `[a-z]+` for parsed nodes
    pub name: Span,
    /// Decoded value
    pub value: Value,
    /// Source text the value was scanned from, empty for lists
    pub raw: Span,
    /// Index of the next sibling or [`NO_LINK`]
    pub next: usize,
    /// Index of the first child or [`NO_LINK`]
    pub child: usize,
}

impl Node {
    pub(crate) fn new(name: Span, value: Value, raw: Span) -> Self {
        Node {
            name,
            value,
            raw,
            next: NO_LINK,
            child: NO_LINK,
        }
    }

    /// The node every failed lookup resolves to.
    pub const fn undefined() -> Self {
        Node {
            name: Span::EMPTY,
            value: Value::None,
            raw: Span::EMPTY,
            next: NO_LINK,
            child: NO_LINK,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next != NO_LINK
    }

    pub fn has_child(&self) -> bool {
        self.child != NO_LINK
    }
}

pub(crate) static UNDEFINED: Node = Node::undefined();

/// A parsed CLON document.
///
/// Created atomically by [`parse`](crate::parse) and immutable afterwards.
/// The tree is `Send + Sync`; any number of readers may query it at once.
///
/// # Examples
///
/// ```
/// use clon_lang::Tree;
///
/// let tree = Tree::parse("(log (level 12) (level 13))").unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.root().name(), "log");
/// assert_eq!(tree.get("level:1").unwrap().raw_text(), "13");
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    text: String,
    nodes: Vec<Node>,
}

impl Tree {
    /// Parse `text` into a tree. Same as [`crate::parse`].
    pub fn parse(text: &str) -> Result<Tree, ParseError> {
        parser::parse(text)
    }

    pub(crate) fn from_parts(text: String, nodes: Vec<Node>) -> Self {
        Tree { text, nodes }
    }

    /// View of the document root (index 0)
    pub fn root(&self) -> View<'_> {
        self.view(0)
    }

    /// View of the node at `index`, undefined when out of range
    pub fn view(&self, index: usize) -> View<'_> {
        View::new(self, index)
    }

    /// The undefined view for this tree
    pub fn undefined(&self) -> View<'_> {
        View::undefined(self)
    }

    /// The verbatim text this tree was parsed from
    pub fn source(&self) -> &str {
        &self.text
    }

    /// All nodes in arena (pre-order) layout
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn text_of(&self, span: Span) -> &str {
        span.slice(&self.text)
    }

    /// Resolve the first match of `path` below the root.
    pub fn get(&self, path: &str) -> Result<View<'_>, PathError> {
        self.root().get(path)
    }

    /// Resolve every match of `path` below the root.
    pub fn get_all(&self, path: &str) -> Result<Vec<View<'_>>, PathError> {
        self.root().get_all(path)
    }

    /// Whether `path` resolves to a defined node.
    pub fn exists(&self, path: &str) -> Result<bool, PathError> {
        self.root().exists(path)
    }

    /// Validate `path` against a `type:min-max` constraint.
    pub fn check(&self, path: &str, constraint: &str) -> Result<bool, CheckError> {
        self.root().check(path, constraint)
    }
}

impl FromStr for Tree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
