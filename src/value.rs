use std::fmt;

use crate::tree::Span;

/// The value carried by a parsed CLON node.
///
/// Every node has exactly one of five kinds. Scalars keep their decoded value
/// next to the node; a `List` is only a marker, its members are reached through
/// the node's `child`/`next` links inside the owning [`Tree`](crate::Tree).
///
/// # Text Slices
///
/// A `String` holds a [`Span`] into the tree's source buffer rather than an
/// owned copy. The span excludes the surrounding quotes:
///
/// ```text
/// (level "info")   →  Value::String(span of `info`)
/// (count 12)       →  Value::Number(12.0)
/// (debug true)     →  Value::Boolean(true)
/// (log (level 1))  →  Value::List
/// ```
///
/// # Examples
///
/// ```
/// use clon_lang::{NodeType, Value};
///
/// assert_eq!(Value::Number(4.0).node_type(), NodeType::Number);
/// assert_eq!(Value::default(), Value::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// Absent value, only ever carried by the undefined node
    #[default]
    None,

    /// `true` or `false`
    Boolean(bool),

    /// Non-negative decimal number (`12`, `3.25`)
    Number(f64),

    /// Quoted text, quotes stripped
    String(Span),

    /// A node whose children follow it in the arena
    List,
}

impl Value {
    /// The kind tag of this value
    pub fn node_type(&self) -> NodeType {
        match self {
            Value::None => NodeType::None,
            Value::Boolean(_) => NodeType::Boolean,
            Value::Number(_) => NodeType::Number,
            Value::String(_) => NodeType::String,
            Value::List => NodeType::List,
        }
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Kind of a node, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    None,
    Boolean,
    Number,
    String,
    List,
}

impl NodeType {
    /// Human-readable type name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::None => "none",
            NodeType::Boolean => "boolean",
            NodeType::Number => "number",
            NodeType::String => "string",
            NodeType::List => "list",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
