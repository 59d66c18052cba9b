use crate::value::{MapValueError, Value};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_i(x: i64) -> Value {
    Value::Int(x)
}
fn v_u(x: u64) -> Value {
    Value::Uint(x)
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn strict_order_is_none_across_variants() {
    assert_eq!(Value::strict_order_cmp(&v_i(1), &v_u(1)), None);
    assert_eq!(Value::strict_order_cmp(&v_txt("a"), &v_i(0)), None);
    assert_eq!(Value::strict_order_cmp(&Value::Null, &v_i(0)), None);
}

#[test]
fn strict_order_agrees_with_native_ordering_within_variant() {
    assert_eq!(
        Value::strict_order_cmp(&v_i(-3), &v_i(4)),
        Some(Ordering::Less)
    );
    assert_eq!(
        Value::strict_order_cmp(&v_txt("b"), &v_txt("a")),
        Some(Ordering::Greater)
    );
    assert_eq!(
        Value::strict_order_cmp(&Value::Bool(false), &Value::Bool(true)),
        Some(Ordering::Less)
    );
}

#[test]
fn strict_order_lists_are_lexicographic_and_short_circuit() {
    let left = Value::from_slice(&[1i64, 2]);
    let right = Value::from_slice(&[1i64, 3]);
    assert_eq!(
        Value::strict_order_cmp(&left, &right),
        Some(Ordering::Less)
    );

    // prefix orders before its extension
    let prefix = Value::from_slice(&[1i64]);
    assert_eq!(
        Value::strict_order_cmp(&prefix, &left),
        Some(Ordering::Less)
    );

    // element-level variant mismatch surfaces as incomparable
    let mixed = Value::List(vec![v_i(1), v_txt("x")]);
    assert_eq!(Value::strict_order_cmp(&left, &mixed), None);
}

#[test]
fn canonical_cmp_is_total_across_variants() {
    // rank decides mixed-variant comparisons, both directions
    let cmp = Value::canonical_cmp(&v_i(1), &v_txt("a"));
    let rev = Value::canonical_cmp(&v_txt("a"), &v_i(1));
    assert_ne!(cmp, Ordering::Equal);
    assert_eq!(cmp, rev.reverse());
}

#[test]
fn map_normalization_sorts_and_rejects_duplicates() {
    let map = Value::from_map(vec![
        (v_txt("z"), v_i(9)),
        (v_txt("a"), v_i(1)),
    ])
    .expect("valid map");

    let Value::Map(entries) = &map else {
        panic!("expected map");
    };
    assert_eq!(entries[0].0, v_txt("a"));
    assert_eq!(entries[1].0, v_txt("z"));

    let dup = Value::from_map(vec![(v_txt("a"), v_i(1)), (v_txt("a"), v_i(2))]);
    assert!(matches!(dup, Err(MapValueError::DuplicateKey { .. })));
}

#[test]
fn map_keys_must_be_scalar_and_non_null() {
    let null_key = Value::from_map(vec![(Value::Null, v_i(1))]);
    assert!(matches!(null_key, Err(MapValueError::NullKey { index: 0 })));

    let list_key = Value::from_map(vec![(Value::from_slice(&[1i64]), v_i(1))]);
    assert!(matches!(
        list_key,
        Err(MapValueError::NonScalarKey { index: 0 })
    ));
}

#[test]
fn set_normalization_sorts_and_dedups() {
    let set = Value::from_set(vec![3i64, 1, 3, 2]);
    assert_eq!(set, Value::Set(vec![v_i(1), v_i(2), v_i(3)]));
}

#[test]
fn container_classification_covers_list_map_set() {
    assert!(Value::List(vec![]).is_container());
    assert!(Value::Map(vec![]).is_container());
    assert!(Value::Set(vec![]).is_container());
    assert!(!v_i(0).is_container());
    assert!(!Value::Null.is_container());
}

#[test]
fn deep_copy_shares_no_container_state() {
    let original = Value::from_slice(&[1i64, 2]);
    let mut copy = original.deep_copy();

    if let Value::List(items) = &mut copy {
        items.push(v_i(3));
    }

    assert_eq!(original, Value::from_slice(&[1i64, 2]));
    assert_ne!(original, copy);
}

#[test]
fn labels_name_the_variant() {
    assert_eq!(v_i(0).label(), "Int");
    assert_eq!(Value::Set(vec![]).label(), "Set");
}

#[test]
fn display_renders_repr_forms() {
    assert_eq!(v_i(-5).to_string(), "-5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(v_txt("hi").to_string(), "\"hi\"");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from_slice(&[1i64, 2]).to_string(), "[1, 2]");
    assert_eq!(
        Value::from_map(vec![(v_txt("a"), v_i(1))])
            .expect("valid map")
            .to_string(),
        "{\"a\": 1}"
    );
    assert_eq!(Value::from_set(vec![2i64, 1]).to_string(), "{1, 2}");
}
