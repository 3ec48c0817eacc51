// tests/output_tests.rs

use clon_lang::{Tree, View, parse, to_clon, to_clon_pretty};

/// Structure and scalar values, ignoring formatting
fn shape(view: View<'_>) -> String {
    let mut out = format!("{}:{}", view.name(), view.node_type());
    match view.as_str() {
        Some(s) => out.push_str(&format!("={:?}", s)),
        None if !view.is_list() => out.push_str(&format!("={}", view.raw_text())),
        None => {
            let children: Vec<String> = view.children().map(shape).collect();
            out.push_str(&format!("[{}]", children.join(",")));
        }
    }
    out
}

fn assert_same_shape(a: &Tree, b: &Tree) {
    assert_eq!(shape(a.root()), shape(b.root()));
    assert_eq!(a.len(), b.len());
}

const DOCUMENTS: &[&str] = &[
    "(level 12)",
    r#"(msg "")"#,
    "(flag false)",
    r#"(log (level "info") (code 12) (sent true))"#,
    r#"(root (log (level 1) (level 2.50)) (log (tags (tag "a") (tag "b c"))))"#,
];

// ============================================================================
// Compact
// ============================================================================

#[test]
fn test_compact_output() {
    let cases = vec![
        ("( level   12 )", "(level 12)"),
        ("(a\n  (b true)\n  (c \"x y\"))", r#"(a (b true)(c "x y"))"#),
        ("(a (b (c 3.50)))", "(a (b (c 3.50)))"),
    ];

    for (input, expected) in cases {
        let tree = parse(input).unwrap();
        assert_eq!(to_clon(tree.root()), expected);
    }
}

#[test]
fn test_display_matches_compact() {
    let tree = parse("(a (b 1) (c 2))").unwrap();
    assert_eq!(tree.root().to_string(), to_clon(tree.root()));
    assert_eq!(tree.get("c").unwrap().to_string(), "(c 2)");
}

#[test]
fn test_undefined_renders_empty() {
    let tree = parse("(a 1)").unwrap();
    assert_eq!(to_clon(tree.undefined()), "");
    assert_eq!(to_clon_pretty(tree.undefined()), "");
}

// ============================================================================
// Pretty
// ============================================================================

#[test]
fn test_pretty_output() {
    let tree = parse(r#"(log (level "info") (tags (tag "a") (tag "b")))"#).unwrap();
    let expected = "(log\n  (level \"info\")\n  (tags\n    (tag \"a\")\n    (tag \"b\")))";
    assert_eq!(to_clon_pretty(tree.root()), expected);
}

#[test]
fn test_pretty_scalar_is_single_line() {
    let tree = parse("(a   true)").unwrap();
    assert_eq!(to_clon_pretty(tree.root()), "(a true)");
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_output_reparses() {
    for input in DOCUMENTS {
        let original = parse(input).unwrap();

        let compact = parse(&to_clon(original.root())).unwrap();
        assert_same_shape(&original, &compact);

        let pretty = parse(&to_clon_pretty(original.root())).unwrap();
        assert_same_shape(&original, &pretty);
    }
}

#[test]
fn test_subtree_output_reparses() {
    let tree = parse(DOCUMENTS[4]).unwrap();
    let inner = tree.get("log:1").unwrap();

    let reparsed = parse(&to_clon(inner)).unwrap();
    assert_eq!(shape(reparsed.root()), shape(inner));
}
