// tests/path_tests.rs

use clon_lang::{Path, PathError, Segment, Selector, get, get_all, parse};

const LOGS: &str = r#"
(root
  (log (level 1) (level 2) (msg "first"))
  (log (level 3))
  (log (msg "third")))
"#;

fn raw_texts(views: &[clon_lang::View<'_>]) -> Vec<String> {
    views.iter().map(|v| v.raw_text().to_string()).collect()
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn test_compile_segments() {
    let path: Path = "log:1.level.msg:*".parse().unwrap();

    assert_eq!(
        path.segments(),
        [
            Segment {
                name: "log".to_string(),
                selector: Selector::Index(1)
            },
            Segment {
                name: "level".to_string(),
                selector: Selector::Index(0)
            },
            Segment {
                name: "msg".to_string(),
                selector: Selector::All
            },
        ]
    );
    assert!(path.has_wildcard());
    assert_eq!(path.to_string(), "log:1.level:0.msg:*");
}

#[test]
fn test_malformed_paths() {
    let cases = vec![
        ("", "malformed path"),
        ("a..b", "malformed path"),
        (".a", "malformed path"),
        ("a.", "malformed path"),
        ("a:1:2", "malformed path"),
        (":1", "malformed path"),
    ];

    for (input, _) in &cases {
        assert!(
            matches!(input.parse::<Path>(), Err(PathError::MalformedPath(_))),
            "input {:?}",
            input
        );
    }
    for (input, prefix) in cases {
        let err = input.parse::<Path>().unwrap_err();
        assert!(err.to_string().starts_with(prefix));
    }
}

#[test]
fn test_malformed_names() {
    for input in ["Level", "le-vel", "a.b2", "a.B:0", "lev el"] {
        assert!(
            matches!(input.parse::<Path>(), Err(PathError::MalformedName(_))),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_malformed_numbers() {
    for input in ["a:", "a:-1", "a:x", "a:1.5", "a:**", "a:99999999999999999999999"] {
        assert!(
            matches!(input.parse::<Path>(), Err(PathError::MalformedNumber(_))),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_malformed_path_through_get() {
    let tree = parse(LOGS).unwrap();
    let err = get("log:x", tree.root()).unwrap_err();
    assert_eq!(err, PathError::MalformedNumber("x".to_string()));
    assert_eq!(err.to_string(), "malformed path: malformed number 'x'");
}

// ============================================================================
// Single resolution
// ============================================================================

#[test]
fn test_ordinal_selection() {
    let tree = parse("(root (a 0) (b 9) (a 1) (a 2))").unwrap();
    let root = tree.root();

    let cases = vec![("a", "0"), ("a:0", "0"), ("a:1", "1"), ("a:2", "2"), ("b", "9")];
    for (path, expected) in cases {
        assert_eq!(get(path, root).unwrap().raw_text(), expected, "path {}", path);
    }

    assert!(get("a:3", root).unwrap().is_undefined());
}

#[test]
fn test_nested_get() {
    let tree = parse(LOGS).unwrap();
    let root = tree.root();

    assert_eq!(get("log.level:1", root).unwrap().raw_text(), "2");
    assert_eq!(get("log:1.level", root).unwrap().raw_text(), "3");
    assert_eq!(get("log:2.msg", root).unwrap().as_str(), Some("third"));
    assert!(get("log:2.level", root).unwrap().is_undefined());
    assert!(get("log:3", root).unwrap().is_undefined());
}

#[test]
fn test_get_through_scalar_is_undefined() {
    let tree = parse(LOGS).unwrap();
    assert!(get("log.level.level", tree.root()).unwrap().is_undefined());
}

#[test]
fn test_wildcard_in_get_takes_first() {
    let tree = parse(LOGS).unwrap();
    let root = tree.root();

    assert_eq!(get("log:*.level:*", root).unwrap().raw_text(), "1");
    assert_eq!(get("log:*", root).unwrap(), get("log:0", root).unwrap());
}

#[test]
fn test_get_from_inner_node() {
    let tree = parse(LOGS).unwrap();
    let second = tree.get("log:1").unwrap();

    assert_eq!(second.get("level").unwrap().raw_text(), "3");
    assert!(second.get("msg").unwrap().is_undefined());
}

#[test]
fn test_exists() {
    let tree = parse(LOGS).unwrap();
    assert!(tree.exists("log:2.msg").unwrap());
    assert!(!tree.exists("log:2.level").unwrap());
    assert!(tree.exists("log:").is_err());
}

// ============================================================================
// Multi resolution
// ============================================================================

#[test]
fn test_wildcard_cardinality() {
    let tree = parse(LOGS).unwrap();
    let root = tree.root();

    assert_eq!(get_all("log:*", root).unwrap().len(), 3);
    assert_eq!(get_all("log:0.level:*", root).unwrap().len(), 2);
    assert_eq!(get_all("log:*.msg", root).unwrap().len(), 2);
    assert_eq!(get_all("missing:*", root).unwrap().len(), 0);
}

#[test]
fn test_cross_product_in_document_order() {
    let tree = parse(LOGS).unwrap();
    let levels = get_all("log:*.level:*", tree.root()).unwrap();
    assert_eq!(raw_texts(&levels), ["1", "2", "3"]);
}

#[test]
fn test_get_all_without_wildcard() {
    let tree = parse(LOGS).unwrap();
    let root = tree.root();

    assert_eq!(raw_texts(&get_all("log:1.level", root).unwrap()), ["3"]);
    assert!(get_all("log:1.msg", root).unwrap().is_empty());
}

#[test]
fn test_get_is_in_get_all() {
    let tree = parse(LOGS).unwrap();
    let root = tree.root();

    for path in ["log:*", "log:*.level:*", "log:*.msg:*", "log:1.level:*"] {
        let single = get(path, root).unwrap();
        let all = get_all(path, root).unwrap();
        if !single.is_undefined() {
            assert!(all.contains(&single), "path {}", path);
        }
    }
}
