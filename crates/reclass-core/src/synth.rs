use crate::{
    emit::{Instr, OpKind, OpSpec, RelOp, SynthOp, emit},
    record::RecordOptions,
};
use reclass_schema::node::{Field, FieldList};

// Synthesis-time environment key for a field's captured default.
fn env_key(field: &str) -> String {
    format!("_def_{field}")
}

fn field_names(fields: &[&Field]) -> Vec<String> {
    fields.iter().map(|f| f.name.clone()).collect()
}

/// Build the full operation table for a resolved field list.
///
/// The constructor, repr and the six comparisons are gated by the type's
/// options; the hash operation is always present.
pub(crate) fn synth_ops(fields: &FieldList, options: RecordOptions) -> Vec<(OpKind, SynthOp)> {
    let mut ops = Vec::with_capacity(9);

    if options.init {
        ops.push((OpKind::Init, emit(init_spec(fields))));
    }
    if options.repr {
        ops.push((OpKind::Repr, emit(repr_spec(fields))));
    }
    if options.compare {
        ops.push((OpKind::Eq, emit(eq_spec(fields))));
        ops.push((OpKind::Ne, emit(ne_spec())));
        for (kind, op) in [
            (OpKind::Lt, RelOp::Lt),
            (OpKind::Le, RelOp::Le),
            (OpKind::Gt, RelOp::Gt),
            (OpKind::Ge, RelOp::Ge),
        ] {
            ops.push((kind, emit(order_spec(kind, op, fields))));
        }
    }
    ops.push((OpKind::Hash, emit(hash_spec(fields))));

    ops
}

/// Constructor body: one assignment per resolved field, in field order.
///
/// Fields excluded from the parameter list still receive their defaults,
/// so the output always covers the whole field list.
fn init_spec(fields: &FieldList) -> OpSpec {
    let mut body = Vec::with_capacity(fields.len());
    let mut env = Vec::new();

    for field in fields {
        let name = field.name.clone();
        match &field.default {
            Some(default) => {
                let key = env_key(&field.name);
                env.push((key.clone(), default.clone()));
                if field.copy_on_default {
                    body.push(Instr::AssignDefaultCopy {
                        field: name,
                        env: key,
                    });
                } else {
                    body.push(Instr::AssignDefault {
                        field: name,
                        env: key,
                    });
                }
            }
            None => body.push(Instr::AssignParam { field: name }),
        }
    }

    if body.is_empty() {
        body.push(Instr::NoOp);
    }

    OpSpec {
        name: OpKind::Init.name(),
        params: field_names(&fields.init_fields()),
        body,
        env,
    }
}

fn repr_spec(fields: &FieldList) -> OpSpec {
    OpSpec {
        name: OpKind::Repr.name(),
        params: vec!["_self".to_string()],
        body: vec![Instr::ReturnRepr {
            fields: field_names(&fields.repr_fields()),
        }],
        env: Vec::new(),
    }
}

fn eq_spec(fields: &FieldList) -> OpSpec {
    OpSpec {
        name: OpKind::Eq.name(),
        params: cmp_params(),
        body: vec![
            Instr::GuardSameType,
            Instr::CompareTupleEq {
                fields: field_names(&fields.compare_fields()),
            },
        ],
        env: Vec::new(),
    }
}

// ne is derived mechanically from eq, never re-synthesized from fields.
fn ne_spec() -> OpSpec {
    OpSpec {
        name: OpKind::Ne.name(),
        params: cmp_params(),
        body: vec![Instr::NegateEq],
        env: Vec::new(),
    }
}

fn order_spec(kind: OpKind, op: RelOp, fields: &FieldList) -> OpSpec {
    OpSpec {
        name: kind.name(),
        params: cmp_params(),
        body: vec![
            Instr::GuardSameType,
            Instr::CompareTuple {
                op,
                fields: field_names(&fields.compare_fields()),
            },
        ],
        env: Vec::new(),
    }
}

fn hash_spec(fields: &FieldList) -> OpSpec {
    OpSpec {
        name: OpKind::Hash.name(),
        params: vec!["_self".to_string()],
        body: vec![Instr::ReturnHash {
            fields: field_names(&fields.hash_fields()),
        }],
        env: Vec::new(),
    }
}

fn cmp_params() -> Vec<String> {
    vec!["_self".to_string(), "_other".to_string()]
}

///
/// TESTS
///
