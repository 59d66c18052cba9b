use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by map/set normalization and hashing.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Strict comparator for identical variants.
///
/// Returns `None` for mismatched variants. Containers compare
/// lexicographically with strict recursion, so a variant mismatch at any
/// depth surfaces as `None`.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::List(a), Value::List(b)) | (Value::Set(a), Value::Set(b)) => {
            strict_order_list(a, b)
        }
        (Value::Map(a), Value::Map(b)) => strict_order_map(a.as_slice(), b.as_slice()),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.partial_cmp(b),
        _ => None,
    }
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) | (Value::Set(a), Value::Set(b)) => {
            canonical_cmp_value_list(a, b)
        }
        (Value::Map(a), Value::Map(b)) => canonical_cmp_value_map(a, b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn canonical_cmp_value_list(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn canonical_cmp_value_map(left: &[(Value, Value)], right: &[(Value, Value)]) -> Ordering {
    for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right.iter()) {
        let key_cmp = canonical_cmp(left_key, right_key);
        if key_cmp != Ordering::Equal {
            return key_cmp;
        }

        let value_cmp = canonical_cmp(left_value, right_value);
        if value_cmp != Ordering::Equal {
            return value_cmp;
        }
    }

    left.len().cmp(&right.len())
}

// Lexicographic, short-circuiting at the first non-equal element; element
// incomparability propagates.
fn strict_order_list(left: &[Value], right: &[Value]) -> Option<Ordering> {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = strict_order_cmp(left, right)?;
        if cmp != Ordering::Equal {
            return Some(cmp);
        }
    }

    left.len().partial_cmp(&right.len())
}

// Compare map entries under strict-order semantics; keys use the canonical
// comparator because normalized maps are already in canonical key order.
fn strict_order_map(left: &[(Value, Value)], right: &[(Value, Value)]) -> Option<Ordering> {
    for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right.iter()) {
        let key_cmp = canonical_cmp(left_key, right_key);
        if key_cmp != Ordering::Equal {
            return Some(key_cmp);
        }

        let value_cmp = strict_order_cmp(left_value, right_value)?;
        if value_cmp != Ordering::Equal {
            return Some(value_cmp);
        }
    }

    left.len().partial_cmp(&right.len())
}
