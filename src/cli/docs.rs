//! Documentation content for the clon CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Paths,
    Constraints,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "paths" | "path" => Some(Self::Paths),
            "constraints" | "constraint" | "check" => Some(Self::Constraints),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CLON DOCUMENTATION

CLON is a parenthesized notation where every value is named and typed.
A document is exactly one node; a list node holds one or more child nodes.

DOCUMENTATION CATEGORIES

  syntax            Names, strings, numbers, booleans and lists
  paths             Selecting nodes with name:index and name:* segments
  constraints       Validating path results with type:min-max

QUICK REFERENCE

  (name "text")     String node
  (name 12.5)       Number node
  (name true)       Boolean node
  (name (a 1)(b 2)) List node
  a.b:1.c           Path: second b under a, then its first c
  s:1-*             Constraint: one or more strings

Run 'clon doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Paths) => Ok(PATHS_DOC),
        Some(DocCategory::Constraints) => Ok(CONSTRAINTS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Nodes and Values

NODES

  (name value)      A node is a name followed by exactly one value
  name              One or more lowercase ASCII letters: [a-z]+

VALUES

  "text"            String: any bytes except '"', no escapes
  42  3.50          Number: digits, optionally '.' and more digits
  true  false       Boolean
  (a 1) (b 2)       List: one or more child nodes

Whitespace (space, tab, CR, LF) may appear between tokens. Negative
numbers, exponents and empty lists are not part of the grammar.

EXAMPLE

  (log
    (level "info")
    (code 12)
    (sent true)
    (tags (tag "a") (tag "b")))
"#;

const PATHS_DOC: &str = r#"PATHS - Selecting Nodes

GRAMMAR

  path              segment ( '.' segment )*
  segment           name [ ':' selector ]
  selector          integer | '*'

Each segment selects among the children of the current nodes. The first
segment is matched against the children of the starting node, usually the
root.

SELECTORS

  level             First child named level (same as level:0)
  level:2           Third child named level
  level:*           Every child named level

USAGE

  clon get level:1 --input '(log (level 12) (level 13))'
    (level 13)

  clon get --all tags.tag:* --input '(log (tags (tag "a") (tag "b")))'
    (tag "a")
    (tag "b")

Without --all a wildcard behaves like :0. With --all every wildcard is
expanded and the results follow document order.
"#;

const CONSTRAINTS_DOC: &str = r#"CONSTRAINTS - Validating Path Results

GRAMMAR

  constraint        type ':' min '-' max
  type              s (string) | n (number) | b (boolean) | o (list)
  min, max          integer | '*'

A constraint holds when the number of nodes the path selects is within
[min, max] and every selected node has the given type. '*' as min means 0,
'*' as max means no upper bound. min must not exceed max.

EXAMPLES

  s:1-1             Exactly one string
  n:2-3             Two or three numbers
  o:0-*             Any number of lists
  b:*-1             At most one boolean

USAGE

  clon check 'level:*' 's:1-*' --input '(log (level "info"))'
    true

Exit status is 0 when the constraint holds and 1 when it does not.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_aliases() {
        assert_eq!(DocCategory::from_name("Paths"), Some(DocCategory::Paths));
        assert_eq!(DocCategory::from_name("check"), Some(DocCategory::Constraints));
        assert_eq!(DocCategory::from_name("operators"), None);
    }

    #[test]
    fn test_unknown_category() {
        let err = get_doc_category("nope").unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }
}
