// tests/builder_tests.rs

use clon_lang::{BuildError, Builder};

#[test]
fn test_build_document() {
    let tree = Builder::document("person", |b| {
        b.scalar("name", "padget")?
            .scalar("age", 32u8)?
            .scalar("height", 1.82)?
            .scalar("alive", true)?;
        b.list("address", |a| {
            a.scalar("street", String::from("rue"))?;
            a.scalar("number", 5usize)?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(tree.get_str("name").unwrap(), Some("padget"));
    assert_eq!(tree.get_number("age").unwrap(), Some(32.0));
    assert_eq!(tree.get_number("height").unwrap(), Some(1.82));
    assert_eq!(tree.get_bool("alive").unwrap(), Some(true));
    assert_eq!(tree.get_number("address.number").unwrap(), Some(5.0));
}

#[test]
fn test_written_text() {
    let mut builder = Builder::new();
    builder
        .list("log", |b| {
            b.scalar("level", 12)?;
            b.sequence("tag", ["a", "b"])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(builder.as_str(), r#"(log (level 12)(tag "a")(tag "b"))"#);
}

#[test]
fn test_sequence() {
    let tree = Builder::document("list", |b| {
        b.sequence("n", vec![1u32, 2, 3])?;
        Ok(())
    })
    .unwrap();

    let values: Vec<f64> = tree
        .get_all("n:*")
        .unwrap()
        .iter()
        .filter_map(|v| v.as_number())
        .collect();
    assert_eq!(values, [1.0, 2.0, 3.0]);
}

#[test]
fn test_negative_zero() {
    let mut builder = Builder::new();
    builder.scalar("z", -0.0f64).unwrap();
    assert_eq!(builder.into_string(), "(z 0)");
}

#[test]
fn test_rejected_values() {
    let mut builder = Builder::new();

    assert_eq!(
        builder.scalar("Name", 1).unwrap_err(),
        BuildError::InvalidName("Name".to_string())
    );
    assert_eq!(
        builder.scalar("q", "say \"hi\"").unwrap_err(),
        BuildError::UnrepresentableString("say \"hi\"".to_string())
    );
    assert!(matches!(
        builder.scalar("n", -3i32),
        Err(BuildError::UnrepresentableNumber(_))
    ));
    assert!(matches!(
        builder.scalar("n", f64::NAN),
        Err(BuildError::UnrepresentableNumber(_))
    ));
    assert!(matches!(
        builder.scalar("n", f64::INFINITY),
        Err(BuildError::UnrepresentableNumber(_))
    ));
}

#[test]
fn test_empty_list_fails_to_build() {
    let err = Builder::document("empty", |_| Ok(())).unwrap_err();
    assert!(matches!(err, BuildError::Parse(_)));
}

#[test]
fn test_float_formatting() {
    let mut builder = Builder::new();
    builder.scalar("x", 0.1f32).unwrap();
    builder.scalar("y", 2.5f64).unwrap();
    builder.scalar("z", -0.0f32).unwrap();
    assert_eq!(builder.as_str(), "(x 0.1)(y 2.5)(z 0)");

    assert!(matches!(
        builder.scalar("n", -0.5f32),
        Err(BuildError::UnrepresentableNumber(_))
    ));
}

// ============================================================================
// Failed writes leave no trace
// ============================================================================

#[test]
fn test_rejected_scalar_is_not_written() {
    let mut builder = Builder::new();
    builder
        .list("root", |b| {
            assert!(b.scalar("x", -1i32).is_err());
            assert!(b.scalar("Bad", 1u8).is_err());
            b.scalar("y", 1u8)?;
            Ok(())
        })
        .unwrap();

    assert_eq!(builder.as_str(), "(root (y 1))");
    let tree = builder.build().unwrap();
    assert_eq!(tree.get_number("y").unwrap(), Some(1.0));
}

#[test]
fn test_rejected_sequence_is_not_written() {
    let tree = Builder::document("root", |b| {
        assert!(b.sequence("s", ["ok", "bad\"quote"]).is_err());
        b.scalar("n", 1)?;
        Ok(())
    })
    .unwrap();

    assert!(tree.get_all("s:*").unwrap().is_empty());
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_failed_list_is_not_written() {
    let tree = Builder::document("root", |b| {
        let failed = b.list("inner", |inner| {
            inner.scalar("a", 1)?;
            inner.scalar("b", f64::NAN)?;
            Ok(())
        });
        assert!(failed.is_err());
        b.scalar("c", true)?;
        Ok(())
    })
    .unwrap();

    assert!(!tree.exists("inner").unwrap());
    assert_eq!(tree.get_bool("c").unwrap(), Some(true));
}
