use crate::{
    comparison::Comparison,
    error::ConstructError,
    record::{Record, RecordType},
};
use reclass_types::{
    Value,
    value::hash::{StableHash, stable_hash_tuple},
};
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};

///
/// OpKind
///
/// Key for one synthesized operation on a record type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum OpKind {
    Init,
    Repr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Hash,
}

impl OpKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Repr => "repr",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Hash => "hash",
        }
    }
}

///
/// RelOp
///
/// Relational operator applied to the compared field tuples.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    // native tuple-ordering semantics: does `ord` satisfy the operator?
    const fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Lt => matches!(ord, Ordering::Less),
            Self::Le => !matches!(ord, Ordering::Greater),
            Self::Gt => matches!(ord, Ordering::Greater),
            Self::Ge => !matches!(ord, Ordering::Less),
        }
    }
}

///
/// Instr
///
/// The fixed statement set generated operation bodies are built from.
/// The backend interprets these verbatim; it performs no schema logic and
/// no validation of the sequence — the synthesizer owns well-formedness.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Instr {
    /// Bind the caller's argument for `field`; absence is an error.
    AssignParam { field: String },

    /// Bind the caller's argument for `field`, falling back to the
    /// captured default bound under `env`.
    AssignDefault { field: String, env: String },

    /// Same, but the fallback deep-copies the captured container default
    /// so instances never share container state.
    AssignDefaultCopy { field: String, env: String },

    /// Zero-field constructor body.
    NoOp,

    /// Yield `Incomparable` unless both operands share the exact
    /// runtime type.
    GuardSameType,

    /// Structural equality over the named field tuple.
    CompareTupleEq { fields: Vec<String> },

    /// Lexicographic relational comparison over the named field tuple,
    /// short-circuiting at the first differing element.
    CompareTuple { op: RelOp, fields: Vec<String> },

    /// Evaluate the type's equality operation and negate its outcome,
    /// preserving `Incomparable`.
    NegateEq,

    /// Render `TypeName(field=value,..)` over the named field tuple.
    ReturnRepr { fields: Vec<String> },

    /// Stable digest over the named field tuple.
    ReturnHash { fields: Vec<String> },
}

///
/// OpSpec
///
/// Declarative description of one synthesized operation: name, parameter
/// list, statement sequence, and the closed environment of defaults
/// captured at synthesis time. The description stays inspectable on the
/// finalized type, independent of execution.
///

#[derive(Clone, Debug, Serialize)]
pub struct OpSpec {
    pub name: &'static str,
    pub params: Vec<String>,
    pub body: Vec<Instr>,
    pub env: Vec<(String, Value)>,
}

impl OpSpec {
    #[must_use]
    pub fn env_value(&self, name: &str) -> Option<&Value> {
        self.env
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }
}

/// Package a declarative operation description into a callable.
///
/// This is the whole of the emission backend: no textual code generation
/// and no machine code at run time, just the description plus the
/// interpreter below.
#[must_use]
pub fn emit(spec: OpSpec) -> SynthOp {
    SynthOp { spec }
}

///
/// SynthOp
///
/// A synthesized operation bound to a record type.
///

#[derive(Clone, Debug, Serialize)]
pub struct SynthOp {
    spec: OpSpec,
}

impl SynthOp {
    #[must_use]
    pub const fn spec(&self) -> &OpSpec {
        &self.spec
    }

    /// Execute a constructor body against pre-bound arguments.
    ///
    /// Statements run in resolved field order, so the output vector
    /// aligns with the type's field list.
    pub(crate) fn run_init(
        &self,
        mut supplied: BTreeMap<String, Value>,
    ) -> Result<Vec<Value>, ConstructError> {
        let mut values = Vec::with_capacity(self.spec.body.len());

        for instr in &self.spec.body {
            match instr {
                Instr::AssignParam { field } => {
                    let value =
                        supplied
                            .remove(field)
                            .ok_or_else(|| ConstructError::MissingArgument {
                                field: field.clone(),
                            })?;
                    values.push(value);
                }
                Instr::AssignDefault { field, env } => {
                    let value = supplied
                        .remove(field)
                        .or_else(|| self.spec.env_value(env).cloned())
                        .ok_or_else(|| ConstructError::MissingArgument {
                            field: field.clone(),
                        })?;
                    values.push(value);
                }
                Instr::AssignDefaultCopy { field, env } => {
                    let value = match supplied.remove(field) {
                        Some(value) => value,
                        None => self.spec.env_value(env).map(Value::deep_copy).ok_or_else(
                            || ConstructError::MissingArgument {
                                field: field.clone(),
                            },
                        )?,
                    };
                    values.push(value);
                }
                Instr::NoOp => {}
                _ => {}
            }
        }

        Ok(values)
    }

    /// Execute a repr body.
    pub(crate) fn run_repr(&self, type_name: &str, record: &Record) -> String {
        for instr in &self.spec.body {
            if let Instr::ReturnRepr { fields } = instr {
                let parts = fields
                    .iter()
                    .filter_map(|name| record.value(name).map(|value| format!("{name}={value}")))
                    .collect::<Vec<_>>();

                return format!("{type_name}({})", parts.join(","));
            }
        }

        format!("{type_name}()")
    }

    /// Execute a comparison body (eq / ne / lt / le / gt / ge).
    pub(crate) fn run_compare(
        &self,
        ty: &RecordType,
        left: &Record,
        right: &Record,
    ) -> Comparison {
        for instr in &self.spec.body {
            match instr {
                Instr::GuardSameType => {
                    if !left.is_same_type(right) {
                        return Comparison::Incomparable;
                    }
                }
                Instr::CompareTupleEq { fields } => {
                    return Comparison::Decided(tuple_of(left, fields) == tuple_of(right, fields));
                }
                Instr::CompareTuple { op, fields } => {
                    return match lexicographic_cmp(
                        &tuple_of(left, fields),
                        &tuple_of(right, fields),
                    ) {
                        Some(ord) => Comparison::Decided(op.holds(ord)),
                        None => Comparison::Incomparable,
                    };
                }
                Instr::NegateEq => {
                    return ty
                        .op(OpKind::Eq)
                        .map_or(Comparison::Incomparable, |eq_op| {
                            eq_op.run_compare(ty, left, right).negate()
                        });
                }
                _ => {}
            }
        }

        Comparison::Incomparable
    }

    /// Execute a hash body.
    pub(crate) fn run_hash(&self, record: &Record) -> StableHash {
        for instr in &self.spec.body {
            if let Instr::ReturnHash { fields } = instr {
                return stable_hash_tuple(&tuple_of(record, fields));
            }
        }

        stable_hash_tuple(&[])
    }
}

fn tuple_of<'a>(record: &'a Record, fields: &[String]) -> Vec<&'a Value> {
    fields
        .iter()
        .filter_map(|name| record.value(name))
        .collect()
}

// Left-to-right, short-circuiting at the first differing element;
// element-level incomparability propagates.
fn lexicographic_cmp(left: &[&Value], right: &[&Value]) -> Option<Ordering> {
    for (left, right) in left.iter().zip(right.iter()) {
        match Value::strict_order_cmp(left, right)? {
            Ordering::Equal => {}
            other => return Some(other),
        }
    }

    left.len().partial_cmp(&right.len())
}
