use crate::value::Value;
use xxhash_rust::xxh3::Xxh3;

/// Value-hash format version byte used by canonical digest encoding.
pub(crate) const VALUE_HASH_VERSION: u8 = 1;

/// Stable XXH3 seed used by canonical value hashing.
pub(crate) const VALUE_HASH_SEED: u64 = 0;

///
/// StableHash
///
/// StableHash is the fixed-width hash identifier exposed by synthesized
/// hash operations and usable as a hash-container key.
///

pub type StableHash = u64;

fn feed_i64(h: &mut Xxh3, x: i64) {
    h.update(&x.to_be_bytes());
}
fn feed_u8(h: &mut Xxh3, x: u8) {
    h.update(&[x]);
}
fn feed_u32(h: &mut Xxh3, x: u32) {
    h.update(&x.to_be_bytes());
}
fn feed_u64(h: &mut Xxh3, x: u64) {
    h.update(&x.to_be_bytes());
}
fn feed_bytes(h: &mut Xxh3, b: &[u8]) {
    h.update(b);
}

// Hash map entries under canonical key order to keep digests deterministic
// even when callers construct `Value::Map` directly in non-canonical order.
#[expect(clippy::cast_possible_truncation)]
fn write_map_entries_to_hasher(entries: &[(Value, Value)], h: &mut Xxh3) {
    let mut ordered = entries.iter().collect::<Vec<_>>();
    ordered.sort_by(|(left_key, left_value), (right_key, right_value)| {
        Value::canonical_cmp(left_key, right_key)
            .then_with(|| Value::canonical_cmp(left_value, right_value))
    });

    feed_u32(h, ordered.len() as u32);
    for (key, value) in ordered {
        feed_u8(h, 0xFD);
        write_to_hasher(key, h);
        feed_u8(h, 0xFE);
        write_to_hasher(value, h);
    }
}

#[expect(clippy::cast_possible_truncation)]
fn write_to_hasher(value: &Value, h: &mut Xxh3) {
    feed_u8(h, value.canonical_tag().to_u8());

    match value {
        Value::Bool(b) => feed_u8(h, u8::from(*b)),
        Value::Float(x) => feed_bytes(h, &x.to_be_bytes()),
        Value::Int(i) => feed_i64(h, *i),
        Value::List(items) | Value::Set(items) => {
            feed_u32(h, items.len() as u32);
            for item in items {
                write_to_hasher(item, h);
            }
        }
        Value::Map(entries) => write_map_entries_to_hasher(entries, h),
        Value::Null => {}
        Value::Text(s) => {
            feed_u32(h, s.len() as u32);
            feed_bytes(h, s.as_bytes());
        }
        Value::Uint(u) => feed_u64(h, *u),
    }
}

/// Canonical 128-bit digest of one value.
#[must_use]
pub fn hash_value(value: &Value) -> [u8; 16] {
    let mut h = Xxh3::with_seed(VALUE_HASH_SEED);
    feed_u8(&mut h, VALUE_HASH_VERSION);
    write_to_hasher(value, &mut h);

    h.digest128().to_be_bytes()
}

/// Canonical 128-bit digest of an ordered value tuple.
///
/// The tuple length is framed in, so `(a,)` and `(a, b)` never collide on a
/// shared prefix.
#[expect(clippy::cast_possible_truncation)]
#[must_use]
pub fn hash_value_tuple(values: &[&Value]) -> [u8; 16] {
    let mut h = Xxh3::with_seed(VALUE_HASH_SEED);
    feed_u8(&mut h, VALUE_HASH_VERSION);
    feed_u32(&mut h, values.len() as u32);
    for value in values {
        write_to_hasher(value, &mut h);
    }

    h.digest128().to_be_bytes()
}

/// Derive one stable 64-bit hash from the canonical value digest.
#[must_use]
pub const fn stable_hash_from_digest(digest: [u8; 16]) -> StableHash {
    u64::from_be_bytes([
        digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
    ])
}

/// Hash one value with the stable hashing contract.
#[must_use]
pub fn stable_hash_value(value: &Value) -> StableHash {
    stable_hash_from_digest(hash_value(value))
}

/// Hash an ordered value tuple with the stable hashing contract.
#[must_use]
pub fn stable_hash_tuple(values: &[&Value]) -> StableHash {
    stable_hash_from_digest(hash_value_tuple(values))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::value::{
        Value,
        hash::{hash_value, stable_hash_from_digest, stable_hash_tuple, stable_hash_value},
    };

    #[test]
    fn stable_hash_uses_digest_prefix_contract() {
        let digest = [
            0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xF0,
            0x0A, 0x0B,
        ];
        assert_eq!(
            stable_hash_from_digest(digest),
            0x1122_3344_5566_7788,
            "stable hash must use the canonical leading 64 bits of the value digest",
        );
    }

    #[test]
    fn stable_hash_is_deterministic_for_same_value() {
        let value = Value::Text("example".to_string());
        assert_eq!(stable_hash_value(&value), stable_hash_value(&value));
    }

    #[test]
    fn digests_are_variant_tag_framed() {
        assert_ne!(
            hash_value(&Value::Int(1)),
            hash_value(&Value::Uint(1)),
            "same payload bits under different variants must not collide",
        );
    }

    #[test]
    fn stable_hash_respects_canonical_map_order() {
        let left = Value::Map(vec![
            (Value::Text("z".to_string()), Value::Uint(9)),
            (Value::Text("a".to_string()), Value::Uint(1)),
        ]);
        let right = Value::Map(vec![
            (Value::Text("a".to_string()), Value::Uint(1)),
            (Value::Text("z".to_string()), Value::Uint(9)),
        ]);
        assert_eq!(
            stable_hash_value(&left),
            stable_hash_value(&right),
            "stable hash must not depend on non-canonical map insertion order",
        );
    }

    #[test]
    fn tuple_hash_frames_in_length() {
        let a = Value::Int(1);
        let b = Value::Int(2);
        assert_ne!(stable_hash_tuple(&[&a]), stable_hash_tuple(&[&a, &b]));
        assert_ne!(stable_hash_tuple(&[]), stable_hash_tuple(&[&a]));
    }
}
