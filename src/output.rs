//! CLON serialization for parsed trees.
//!
//! # Features
//!
//! - **Compact output** via [`to_clon()`] - single line, siblings packed
//! - **Pretty output** via [`to_clon_pretty()`] - one node per line, 2-space indentation
//! - **Round-trip safe** - both forms reparse to the same values and structure
//!
//! Numbers and booleans are written from their source text, so `3.50` stays
//! `3.50`. Strings are re-quoted from their unquoted value.
//!
//! # Examples
//!
//! ```
//! use clon_lang::parse;
//! use clon_lang::output::{to_clon, to_clon_pretty};
//!
//! let tree = parse("(log   (level 12)\n (msg \"hi\"))").unwrap();
//!
//! assert_eq!(to_clon(tree.root()), r#"(log (level 12)(msg "hi"))"#);
//! assert_eq!(to_clon_pretty(tree.root()), "(log\n  (level 12)\n  (msg \"hi\"))");
//! ```

use crate::{tree::View, value::Value};

pub struct ClonPrinter {
    pretty: bool,
}

enum Step<'a> {
    Open(View<'a>, usize),
    Close,
}

impl ClonPrinter {
    pub fn new(pretty: bool) -> Self {
        ClonPrinter { pretty }
    }

    pub fn print(&self, view: View<'_>) -> String {
        let mut out = String::new();
        if view.is_undefined() {
            return out;
        }

        // Pending work, innermost last; no recursion on nesting depth
        let mut stack = vec![Step::Open(view, 0)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node, depth) => self.open_node(&mut out, &mut stack, node, depth),
                Step::Close => out.push(')'),
            }
        }
        out
    }

    fn open_node<'a>(
        &self,
        out: &mut String,
        stack: &mut Vec<Step<'a>>,
        view: View<'a>,
        depth: usize,
    ) {
        if self.pretty && depth > 0 {
            out.push('\n');
            out.push_str(&self.indent(depth));
        }

        out.push('(');
        out.push_str(view.name());

        match view.value() {
            Value::Boolean(_) | Value::Number(_) => {
                out.push(' ');
                out.push_str(view.raw_text());
                out.push(')');
            }
            Value::String(_) => {
                out.push_str(" \"");
                out.push_str(view.as_str().unwrap_or_default());
                out.push_str("\")");
            }
            Value::List => {
                if !self.pretty {
                    out.push(' ');
                }
                stack.push(Step::Close);
                let children: Vec<View<'a>> = view.children().collect();
                stack.extend(
                    children
                        .into_iter()
                        .rev()
                        .map(|child| Step::Open(child, depth + 1)),
                );
            }
            Value::None => out.push(')'),
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Serialize a node and its subtree on a single line.
///
/// The undefined view serializes to the empty string.
pub fn to_clon(view: View<'_>) -> String {
    ClonPrinter::new(false).print(view)
}

/// Serialize a node and its subtree with one child per line.
pub fn to_clon_pretty(view: View<'_>) -> String {
    ClonPrinter::new(true).print(view)
}
