// tests/constraint_tests.rs

use clon_lang::{Cardinality, CheckError, Constraint, ConstraintError, NodeType, check, parse};

fn levels(n: usize) -> String {
    let children: String = (0..n).map(|i| format!("(level \"l{}\")", i)).collect();
    format!("(log (code 1) {})", children)
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn test_compile_constraints() {
    let cases = vec![
        ("s:2-3", NodeType::String, 2, Some(3)),
        ("n:1-1", NodeType::Number, 1, Some(1)),
        ("b:0-*", NodeType::Boolean, 0, None),
        ("o:*-4", NodeType::List, 0, Some(4)),
        ("o:*-*", NodeType::List, 0, None),
    ];

    for (input, expected, min, max) in cases {
        let constraint: Constraint = input.parse().unwrap();
        assert_eq!(constraint.expected, expected, "input {}", input);
        assert_eq!(constraint.cardinality, Cardinality { min, max });
    }
}

#[test]
fn test_display() {
    let constraint: Constraint = "o:*-*".parse().unwrap();
    assert_eq!(constraint.to_string(), "o:0-*");

    let constraint: Constraint = "s:2-3".parse().unwrap();
    assert_eq!(constraint.to_string(), "s:2-3");
}

#[test]
fn test_malformed_constraints() {
    let cases = vec![
        "",
        "s",
        "s:2",
        "s:2-3-4",
        "s:2:3-4",
        "x:1-2",
        "str:1-2",
        ":1-2",
        "s:a-2",
        "s:1-",
        "s:-1",
        "s:3-2",
    ];

    for input in cases {
        assert!(
            matches!(
                input.parse::<Constraint>(),
                Err(ConstraintError::MalformedConstraint(_))
            ),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_cardinality_bounds() {
    let bounded = Cardinality { min: 2, max: Some(3) };
    assert!(!bounded.contains(1));
    assert!(bounded.contains(2));
    assert!(bounded.contains(3));
    assert!(!bounded.contains(4));

    let open = Cardinality { min: 0, max: None };
    assert!(open.contains(0));
    assert!(open.contains(usize::MAX));
}

// ============================================================================
// Checking
// ============================================================================

#[test]
fn test_boundaries() {
    let cases = vec![(0, false), (1, false), (2, true), (3, true), (4, false)];

    for (count, expected) in cases {
        let tree = parse(&levels(count)).unwrap();
        assert_eq!(
            check("level:*", "s:2-3", tree.root()).unwrap(),
            expected,
            "{} levels",
            count
        );
    }
}

#[test]
fn test_type_mismatch_fails() {
    let tree = parse(r#"(log (level "info") (level 2))"#).unwrap();
    let root = tree.root();

    assert!(!check("level:*", "s:1-2", root).unwrap());
    assert!(!check("level:*", "n:1-2", root).unwrap());
    assert!(check("level:1", "n:1-1", root).unwrap());
}

#[test]
fn test_empty_results() {
    let tree = parse("(log (code 1))").unwrap();
    let root = tree.root();

    assert!(check("level:*", "s:0-0", root).unwrap());
    assert!(check("level:*", "b:*-1", root).unwrap());
    assert!(!check("level", "s:1-1", root).unwrap());
}

#[test]
fn test_lists() {
    let tree = parse("(root (log (a 1)) (log (b 2)))").unwrap();
    assert!(tree.check("log:*", "o:2-*").unwrap());
    assert!(!tree.check("log:*.a", "o:1-1").unwrap());
}

#[test]
fn test_check_errors() {
    let tree = parse("(log (code 1))").unwrap();
    let root = tree.root();

    assert!(matches!(
        check("Code", "n:1-1", root),
        Err(CheckError::Path(_))
    ));
    assert!(matches!(
        check("code", "n:1", root),
        Err(CheckError::Constraint(_))
    ));

    let err = check("code", "q:1-1", root).unwrap_err();
    assert!(err.to_string().starts_with("malformed constraint"));
}
