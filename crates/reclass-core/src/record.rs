use crate::{
    comparison::Comparison,
    emit::{OpKind, SynthOp},
    error::{ConstructError, Error},
    synth::synth_ops,
};
use reclass_schema::node::{FieldDecl, FieldList};
use reclass_types::{
    Value,
    value::hash::{StableHash, stable_hash_tuple},
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// RecordOptions
///
/// Per-type switches for the synthesized operation families. Hashing is
/// not optional; every finalized type carries a hash operation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RecordOptions {
    pub init: bool,
    pub repr: bool,
    pub compare: bool,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            init: true,
            repr: true,
            compare: true,
        }
    }
}

///
/// RecordDecl
///
/// Declarative input to finalization: a type name, named ancestors
/// (oldest-first), and the type's own ordered field declarations.
///

#[derive(Clone, Debug, Serialize)]
pub struct RecordDecl {
    pub name: String,
    pub ancestors: Vec<String>,
    pub fields: Vec<(String, FieldDecl)>,
}

impl RecordDecl {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ancestors: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Name a previously finalized ancestor. Order matters: later
    /// ancestors override earlier ones during resolution.
    #[must_use]
    pub fn ancestor(mut self, name: &str) -> Self {
        self.ancestors.push(name.to_string());
        self
    }

    /// Append one own field declaration.
    #[must_use]
    pub fn field(mut self, name: &str, decl: impl Into<FieldDecl>) -> Self {
        self.fields.push((name.to_string(), decl.into()));
        self
    }
}

///
/// RecordType
///
/// A finalized record type: the resolved field schema plus the table of
/// synthesized operations. A cheap-clone handle over shared immutable
/// state; the shared allocation's pointer identity is what "exact same
/// runtime type" means for comparisons.
///

#[derive(Clone, Debug)]
pub struct RecordType {
    inner: Arc<TypeInner>,
}

#[derive(Debug)]
struct TypeInner {
    name: String,
    fields: FieldList,
    options: RecordOptions,
    ops: Vec<(OpKind, SynthOp)>,
}

impl RecordType {
    pub(crate) fn synthesize(name: String, fields: FieldList, options: RecordOptions) -> Self {
        let ops = synth_ops(&fields, options);

        Self {
            inner: Arc::new(TypeInner {
                name,
                fields,
                options,
                ops,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn fields(&self) -> &FieldList {
        &self.inner.fields
    }

    #[must_use]
    pub fn options(&self) -> RecordOptions {
        self.inner.options
    }

    /// Exact runtime-type identity: both handles share one finalized type.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The synthesized operation of the given kind, if the type carries it.
    #[must_use]
    pub fn op(&self, kind: OpKind) -> Option<&SynthOp> {
        self.inner
            .ops
            .iter()
            .find_map(|(k, op)| (*k == kind).then_some(op))
    }

    /// Construct an instance of this type from caller arguments.
    ///
    /// With the constructor disabled, no arguments are accepted and every
    /// field must fill from its declared default.
    pub fn construct(&self, args: Args) -> Result<Record, Error> {
        let values = match self.op(OpKind::Init) {
            Some(init) => {
                let bound = args.bind(&init.spec().params)?;
                init.run_init(bound)?
            }
            None => {
                args.bind(&[])?;
                self.values_from_defaults()?
            }
        };

        Ok(Record {
            ty: self.clone(),
            values,
        })
    }

    fn values_from_defaults(&self) -> Result<Vec<Value>, ConstructError> {
        let mut values = Vec::with_capacity(self.fields().len());
        for field in self.fields() {
            let default =
                field
                    .default
                    .as_ref()
                    .ok_or_else(|| ConstructError::MissingArgument {
                        field: field.name.clone(),
                    })?;
            values.push(if field.copy_on_default {
                default.deep_copy()
            } else {
                default.clone()
            });
        }

        Ok(values)
    }
}

///
/// Args
///
/// Constructor arguments: positional values first, named values after.
/// Positional arguments bind to parameters left to right.
///

#[derive(Clone, Debug, Default)]
pub struct Args {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pos(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn named(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.named.push((name.to_string(), value.into()));
        self
    }

    // Bind against the constructor's parameter list, by position then by
    // name, rejecting overflow, unknown names, and double binding.
    pub(crate) fn bind(self, params: &[String]) -> Result<BTreeMap<String, Value>, ConstructError> {
        if self.positional.len() > params.len() {
            return Err(ConstructError::TooManyPositional {
                expected: params.len(),
                given: self.positional.len(),
            });
        }

        let mut bound = BTreeMap::new();
        for (param, value) in params.iter().zip(self.positional) {
            bound.insert(param.clone(), value);
        }
        for (name, value) in self.named {
            if !params.contains(&name) {
                return Err(ConstructError::UnknownArgument { name });
            }
            if bound.contains_key(&name) {
                return Err(ConstructError::DuplicateArgument { field: name });
            }
            bound.insert(name, value);
        }

        Ok(bound)
    }
}

///
/// Record
///
/// An instance of a finalized record type: field values stored in
/// resolved field order, behaviour dispatched through the type's
/// synthesized operation table.
///

#[derive(Clone, Debug)]
pub struct Record {
    ty: RecordType,
    values: Vec<Value>,
}

impl Record {
    #[must_use]
    pub const fn ty(&self) -> &RecordType {
        &self.ty
    }

    /// Exact runtime-type identity, not structural equivalence.
    #[must_use]
    pub fn is_same_type(&self, other: &Self) -> bool {
        self.ty.is_same(&other.ty)
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        let index = self.ty.fields().position(field)?;
        self.values.get(index)
    }

    pub fn get(&self, field: &str) -> Result<&Value, Error> {
        self.value(field).ok_or_else(|| self.unknown_field(field))
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), Error> {
        let index = self
            .ty
            .fields()
            .position(field)
            .ok_or_else(|| self.unknown_field(field))?;
        self.values[index] = value.into();

        Ok(())
    }

    fn unknown_field(&self, field: &str) -> Error {
        Error::UnknownField {
            type_name: self.ty.name().to_string(),
            field: field.to_string(),
        }
    }

    /// The synthesized representation, when the type carries one.
    #[must_use]
    pub fn repr(&self) -> Option<String> {
        self.ty
            .op(OpKind::Repr)
            .map(|op| op.run_repr(self.ty.name(), self))
    }

    /// Stable hash over the hash-participating field tuple.
    #[must_use]
    pub fn record_hash(&self) -> StableHash {
        self.ty
            .op(OpKind::Hash)
            .map_or_else(|| stable_hash_tuple(&[]), |op| op.run_hash(self))
    }

    fn compare(&self, other: &Self, kind: OpKind) -> Comparison {
        self.ty
            .op(kind)
            .map_or(Comparison::Incomparable, |op| {
                op.run_compare(&self.ty, self, other)
            })
    }

    #[must_use]
    pub fn eq(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Eq)
    }

    #[must_use]
    pub fn ne(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Ne)
    }

    #[must_use]
    pub fn lt(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Lt)
    }

    #[must_use]
    pub fn le(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Le)
    }

    #[must_use]
    pub fn gt(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Gt)
    }

    #[must_use]
    pub fn ge(&self, other: &Self) -> Comparison {
        self.compare(other, OpKind::Ge)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr() {
            Some(repr) => write!(f, "{repr}"),
            None => write!(f, "<{} record>", self.ty.name()),
        }
    }
}

///
/// TESTS
///
