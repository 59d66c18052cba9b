use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by the hashing surface.
///
/// IMPORTANT:
/// Tag values are part of stable hash behavior and must remain fixed.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Bool = 1,
    Float = 2,
    Int = 3,
    List = 4,
    Map = 5,
    Null = 6,
    Set = 7,
    Text = 8,
    Uint = 9,
}

impl ValueTag {
    /// Stable hash byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Set => "Set",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}

/// Stable canonical variant tag used by hash encodings.
#[must_use]
pub const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::Float(_) => ValueTag::Float,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Set(_) => ValueTag::Set,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
