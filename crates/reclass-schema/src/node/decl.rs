use crate::prelude::*;

///
/// FieldDecl
///
/// What one type declares for a single field name, before collection.
///

#[derive(Clone, Debug, Serialize)]
pub enum FieldDecl {
    /// Annotation only; the field has no default and the constructor
    /// must receive a value for it.
    Bare,

    /// Plain default value; all participation flags enabled.
    Default(Value),

    /// Explicit per-field configuration.
    Spec(FieldSpec),
}

impl FieldDecl {
    /// Shorthand for a plain default declaration.
    pub fn with_default(value: impl Into<Value>) -> Self {
        Self::Default(value.into())
    }
}

///
/// FieldSpec
///
/// Explicit field configuration: optional default plus the four
/// participation flags, all enabled unless switched off.
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldSpec {
    pub default: Option<Value>,
    pub init: bool,
    pub repr: bool,
    pub hash: bool,
    pub compare: bool,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            default: None,
            init: true,
            repr: true,
            hash: true,
            compare: true,
        }
    }
}

impl FieldSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub const fn init(mut self, enabled: bool) -> Self {
        self.init = enabled;
        self
    }

    #[must_use]
    pub const fn repr(mut self, enabled: bool) -> Self {
        self.repr = enabled;
        self
    }

    #[must_use]
    pub const fn hash(mut self, enabled: bool) -> Self {
        self.hash = enabled;
        self
    }

    #[must_use]
    pub const fn compare(mut self, enabled: bool) -> Self {
        self.compare = enabled;
        self
    }
}

impl From<FieldSpec> for FieldDecl {
    fn from(spec: FieldSpec) -> Self {
        Self::Spec(spec)
    }
}

///
/// TESTS
///
