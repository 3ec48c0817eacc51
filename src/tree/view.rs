use std::fmt;

use crate::{
    constraint::{self, CheckError},
    output,
    path::{Path, PathError},
    tree::{NO_LINK, Node, Tree, UNDEFINED},
    value::{NodeType, Value},
};

/// Read-only cursor into a [`Tree`].
///
/// A view is a `(tree, index)` pair; it is `Copy` and creating one never
/// allocates. Every accessor is total: on the undefined view they return the
/// empty name, [`NodeType::None`] and `None` for typed getters.
///
/// # Examples
///
/// ```
/// use clon_lang::{NodeType, parse};
///
/// let tree = parse(r#"(log (level "info") (code 7))"#).unwrap();
/// let root = tree.root();
///
/// let level = root.get("level").unwrap();
/// assert_eq!(level.as_str(), Some("info"));
/// assert_eq!(level.raw_text(), "\"info\"");
///
/// let missing = root.get("message").unwrap();
/// assert!(missing.is_undefined());
/// assert_eq!(missing.node_type(), NodeType::None);
/// ```
#[derive(Clone, Copy)]
pub struct View<'a> {
    tree: &'a Tree,
    index: usize,
}

impl<'a> View<'a> {
    pub(crate) fn new(tree: &'a Tree, index: usize) -> Self {
        let index = if index < tree.len() { index } else { NO_LINK };
        View { tree, index }
    }

    pub(crate) fn undefined(tree: &'a Tree) -> Self {
        View {
            tree,
            index: NO_LINK,
        }
    }

    /// The tree this view reads from
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// Arena index, `None` for the undefined view
    pub fn index(&self) -> Option<usize> {
        (self.index != NO_LINK).then_some(self.index)
    }

    /// Underlying node; the shared undefined node when nothing is addressed
    pub fn node(&self) -> &'a Node {
        self.tree.node(self.index).unwrap_or(&UNDEFINED)
    }

    pub fn is_undefined(&self) -> bool {
        self.index == NO_LINK
    }

    pub fn name(&self) -> &'a str {
        self.tree.text_of(self.node().name)
    }

    pub fn node_type(&self) -> NodeType {
        self.node().value.node_type()
    }

    pub fn value(&self) -> Value {
        self.node().value
    }

    /// Exact source text of the value (strings keep their quotes)
    pub fn raw_text(&self) -> &'a str {
        self.tree.text_of(self.node().raw)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.node().value.as_bool()
    }

    pub fn as_number(&self) -> Option<f64> {
        self.node().value.as_number()
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self.node().value {
            Value::String(span) => Some(self.tree.text_of(span)),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.node_type() == NodeType::None
    }

    pub fn is_bool(&self) -> bool {
        self.node_type() == NodeType::Boolean
    }

    pub fn is_number(&self) -> bool {
        self.node_type() == NodeType::Number
    }

    pub fn is_string(&self) -> bool {
        self.node_type() == NodeType::String
    }

    pub fn is_list(&self) -> bool {
        self.node_type() == NodeType::List
    }

    pub fn first_child(&self) -> Option<View<'a>> {
        let child = self.node().child;
        (child != NO_LINK).then(|| View::new(self.tree, child))
    }

    pub fn next_sibling(&self) -> Option<View<'a>> {
        let next = self.node().next;
        (next != NO_LINK).then(|| View::new(self.tree, next))
    }

    /// Direct children in document order. Empty for scalars.
    pub fn children(&self) -> Children<'a> {
        Children {
            tree: self.tree,
            index: self.node().child,
        }
    }

    /// First match of a path expression below this node.
    ///
    /// Fails only when `path` is malformed; a well-formed path with no match
    /// yields the undefined view.
    pub fn get(&self, path: &str) -> Result<View<'a>, PathError> {
        Ok(path.parse::<Path>()?.get(*self))
    }

    /// Every match of a path expression below this node, in document order.
    pub fn get_all(&self, path: &str) -> Result<Vec<View<'a>>, PathError> {
        Ok(path.parse::<Path>()?.get_all(*self))
    }

    pub fn exists(&self, path: &str) -> Result<bool, PathError> {
        Ok(!self.get(path)?.is_undefined())
    }

    /// String value at `path`, `None` on a miss or another type
    pub fn get_str(&self, path: &str) -> Result<Option<&'a str>, PathError> {
        Ok(self.get(path)?.as_str())
    }

    pub fn get_number(&self, path: &str) -> Result<Option<f64>, PathError> {
        Ok(self.get(path)?.as_number())
    }

    pub fn get_bool(&self, path: &str) -> Result<Option<bool>, PathError> {
        Ok(self.get(path)?.as_bool())
    }

    /// Validate the results of `path` against a `type:min-max` constraint.
    pub fn check(&self, path: &str, constraint: &str) -> Result<bool, CheckError> {
        constraint::check(path, constraint, *self)
    }
}

impl PartialEq for View<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for View<'_> {}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("index", &self.index())
            .field("name", &self.name())
            .field("type", &self.node_type())
            .field("raw", &self.raw_text())
            .finish()
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&output::to_clon(*self))
    }
}

/// Iterator over the children of a list node, following `next` links.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a Tree,
    index: usize,
}

impl<'a> Iterator for Children<'a> {
    type Item = View<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.index)?;
        let view = View::new(self.tree, self.index);
        self.index = node.next;
        Some(view)
    }
}
