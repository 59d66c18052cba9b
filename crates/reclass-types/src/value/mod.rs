mod compare;
mod rank;
mod tag;

pub mod hash;

#[cfg(test)]
mod tests;

use crate::float::Float64;
use serde::Serialize;
use std::{cmp::Ordering, fmt};
use thiserror::Error as ThisError;

// re-exports
pub(crate) use tag::ValueTag;

///
/// MapValueError
///
/// Invariant violations for `Value::Map` construction/normalization.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MapValueError {
    #[error("map key at index {index} must be non-null")]
    NullKey { index: usize },

    #[error("map key at index {index} is not scalar")]
    NonScalarKey { index: usize },

    #[error("map contains duplicate keys at normalized positions {left_index} and {right_index}")]
    DuplicateKey {
        left_index: usize,
        right_index: usize,
    },
}

///
/// Value
///
/// Dynamic field value for record instances and field defaults.
///
/// Null → the field holds "no value"; distinct from a missing default.
/// Map  → canonical deterministic representation: entries sorted by
///        canonical key order, keys scalar and unique.
/// Set  → membership semantics: sorted under canonical order, deduplicated.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    /// Ordered list of values; order is preserved and significant.
    List(Vec<Self>),
    Map(Vec<(Self, Self)>),
    Null,
    Set(Vec<Self>),
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a canonical `Value::Map` from owned key/value entries.
    ///
    /// Invariants are validated and entries are normalized:
    /// - keys must be scalar and non-null
    /// - entries are sorted by canonical key order
    /// - duplicate keys are rejected
    pub fn from_map(entries: Vec<(Self, Self)>) -> Result<Self, MapValueError> {
        let normalized = Self::normalize_map_entries(entries)?;
        Ok(Self::Map(normalized))
    }

    /// Build a canonical `Value::Set`: sorted under canonical order, unique.
    pub fn from_set<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        let mut items = items.into_iter().map(Into::into).collect::<Vec<_>>();
        items.sort_by(Self::canonical_cmp);
        items.dedup();

        Self::Set(items)
    }

    /// Validate map entry invariants without changing order.
    pub fn validate_map_entries(entries: &[(Self, Self)]) -> Result<(), MapValueError> {
        for (index, (key, _)) in entries.iter().enumerate() {
            if matches!(key, Self::Null) {
                return Err(MapValueError::NullKey { index });
            }
            if !key.is_scalar() {
                return Err(MapValueError::NonScalarKey { index });
            }
        }

        Ok(())
    }

    /// Normalize map entries into canonical deterministic order.
    pub fn normalize_map_entries(
        mut entries: Vec<(Self, Self)>,
    ) -> Result<Vec<(Self, Self)>, MapValueError> {
        Self::validate_map_entries(&entries)?;
        entries.sort_by(|(left_key, _), (right_key, _)| Self::canonical_cmp(left_key, right_key));

        for i in 1..entries.len() {
            let (left_key, _) = &entries[i - 1];
            let (right_key, _) = &entries[i];
            if Self::canonical_cmp(left_key, right_key) == Ordering::Equal {
                return Err(MapValueError::DuplicateKey {
                    left_index: i - 1,
                    right_index: i,
                });
            }
        }

        Ok(entries)
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_) | Self::Set(_))
    }

    /// Returns true for the container variants that take the
    /// copy-on-default treatment in synthesized constructors.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Set(_))
    }

    /// Stable canonical variant tag used by hash encodings.
    #[must_use]
    pub(crate) const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.canonical_tag().label()
    }

    /// Stable canonical rank used by cross-variant ordering surfaces.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        rank::canonical_rank(self)
    }

    /// Total canonical comparator used by map/set normalization and hashing.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }

    /// Strict comparator for identical variants.
    ///
    /// Returns `None` for mismatched variants. This is the comparator behind
    /// tuple-lexicographic record ordering.
    #[must_use]
    pub fn strict_order_cmp(left: &Self, right: &Self) -> Option<Ordering> {
        compare::strict_order_cmp(left, right)
    }

    ///
    /// COPY
    ///

    /// Produce an independent copy of this value.
    ///
    /// Container storage is owned, so the copy shares no state with the
    /// original. Generated constructor bodies call this on the
    /// copy-on-default branch so the defensive copy is explicit.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    Float64 => Float,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    &str    => Text,
    String  => Text,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

// NOTE:
// Value::partial_cmp is the strict same-variant ordering. Cross-variant
// comparisons yield None; use canonical_cmp where a total order is needed.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Self::strict_order_cmp(self, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Null => write!(f, "null"),
            Self::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}
