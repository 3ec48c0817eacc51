use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    scanner::{Scanner, Symbol},
    tree::{Node, Span, Tree},
    value::Value,
};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    OpenParen,
    CloseParen,
    Name,
    Boolean,
    Quote,
    Digit,
    /// Any legal start of a value
    Value,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expected::OpenParen => "'('",
            Expected::CloseParen => "')'",
            Expected::Name => "[a-z]",
            Expected::Boolean => "'true' or 'false'",
            Expected::Quote => "'\"'",
            Expected::Digit => "[0-9]",
            Expected::Value => "'(', 'true', 'false', '\"' or [0-9]",
            Expected::EndOfInput => "EOF",
        };
        f.write_str(text)
    }
}

/// Errors raised while scanning or parsing CLON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not contain what the grammar requires at `offset`
    #[error("expected {expected} at offset {offset}")]
    ExpectedCharacter { expected: Expected, offset: usize },
}

impl ParseError {
    pub fn expected(expected: Expected, offset: usize) -> Self {
        ParseError::ExpectedCharacter { expected, offset }
    }

    /// Byte offset of the failure
    pub fn offset(&self) -> usize {
        match self {
            ParseError::ExpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// Top-down builder appending nodes into a flat arena.
///
/// Children are parsed right after their parent is appended, which keeps the
/// arena in pre-order. Sibling links are back-patched: a node's index is only
/// known once it has been pushed, so each new sibling is written into the
/// `next` field of the one before it.
///
/// Open lists are kept on an explicit stack of frames rather than the
/// call stack, so nesting depth is limited by memory only.
pub struct Parser<'a> {
    nodes: &'a mut Vec<Node>,
    scanner: Scanner<'a>,
}

/// A list whose closing `)` has not been reached yet.
#[derive(Debug, Clone, Copy)]
struct Frame {
    parent: usize,
    previous: Option<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, nodes: &'a mut Vec<Node>) -> Self {
        Parser {
            nodes,
            scanner: Scanner::new(input),
        }
    }

    /// `blank* node blank* EOF`
    pub fn parse_document(&mut self) -> Result<usize, ParseError> {
        self.scanner.skip_blanks();
        let root = self.parse_node()?;
        self.scanner.skip_blanks();

        if !self.scanner.is_at_end() {
            return Err(ParseError::expected(
                Expected::EndOfInput,
                self.scanner.offset(),
            ));
        }
        Ok(root)
    }

    /// Parse one `(name value)` node with its whole subtree and return its
    /// arena index.
    pub fn parse_node(&mut self) -> Result<usize, ParseError> {
        let root = self.nodes.len();
        let mut open: Vec<Frame> = Vec::new();

        loop {
            let (index, is_list) = self.open_node()?;

            if let Some(frame) = open.last_mut() {
                match frame.previous {
                    None => self.nodes[frame.parent].child = index,
                    Some(prev) => self.nodes[prev].next = index,
                }
                frame.previous = Some(index);
            }

            if is_list {
                open.push(Frame {
                    parent: index,
                    previous: None,
                });
                continue;
            }

            // Close every list that has no further child
            loop {
                self.scanner.skip_blanks();
                if open.is_empty() {
                    return Ok(root);
                }
                if self.scanner.classify() == Symbol::OpenParen {
                    break;
                }
                self.scanner.expect(Symbol::CloseParen, Expected::CloseParen)?;
                open.pop();
            }
        }
    }

    /// Append the node at the cursor. Scalars are consumed up to and
    /// including their `)`; a list stops in front of its first child.
    fn open_node(&mut self) -> Result<(usize, bool), ParseError> {
        self.scanner.expect(Symbol::OpenParen, Expected::OpenParen)?;
        self.scanner.skip_blanks();
        let name = self.scanner.scan_name()?;
        self.scanner.skip_blanks();

        let index = self.nodes.len();

        // The next symbol alone decides the value kind
        match self.scanner.classify() {
            Symbol::LetterT | Symbol::LetterF => {
                let (value, raw) = self.scanner.scan_boolean()?;
                self.push(Node::new(name, Value::Boolean(value), raw));
            }
            Symbol::Quote => {
                let (raw, content) = self.scanner.scan_string()?;
                self.push(Node::new(name, Value::String(content), raw));
            }
            Symbol::Digit => {
                let raw = self.scanner.scan_number()?;
                let number = self
                    .scanner
                    .slice(raw)
                    .parse::<f64>()
                    .map_err(|_| ParseError::expected(Expected::Digit, raw.start))?;
                self.push(Node::new(name, Value::Number(number), raw));
            }
            Symbol::OpenParen => {
                self.push(Node::new(name, Value::List, Span::EMPTY));
                return Ok((index, true));
            }
            _ => {
                return Err(ParseError::expected(
                    Expected::Value,
                    self.scanner.offset(),
                ));
            }
        }

        self.scanner.skip_blanks();
        self.scanner.expect(Symbol::CloseParen, Expected::CloseParen)?;
        Ok((index, false))
    }

    fn push(&mut self, node: Node) {
        trace!(
            index = self.nodes.len(),
            name = self.scanner.slice(node.name),
            kind = %node.value.node_type(),
            "node"
        );
        self.nodes.push(node);
    }
}

/// Parse a complete CLON document.
///
/// The text is copied into the tree's own buffer first; every name and value
/// span in the resulting arena points into that buffer. The arena is reserved
/// up front to the number of `(` in the input, an upper bound on node count.
///
/// # Examples
///
/// ```
/// use clon_lang::{Expected, ParseError, parse};
///
/// let tree = parse("(log (level 12) (level 13))").unwrap();
/// assert_eq!(tree.len(), 3);
///
/// let err = parse("()").unwrap_err();
/// assert_eq!(err, ParseError::expected(Expected::Name, 1));
/// ```
pub fn parse(text: &str) -> Result<Tree, ParseError> {
    let buffer = text.to_owned();
    let capacity = buffer.bytes().filter(|&b| b == b'(').count();
    let mut nodes = Vec::with_capacity(capacity);

    Parser::new(&buffer, &mut nodes).parse_document()?;

    debug!(nodes = nodes.len(), bytes = buffer.len(), "parsed document");
    Ok(Tree::from_parts(buffer, nodes))
}
