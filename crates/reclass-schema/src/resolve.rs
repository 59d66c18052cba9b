use crate::prelude::*;

/// Schema Resolver: ordered merge-by-name across the ancestor chain.
///
/// Ancestor lists fold in oldest-first, then the type's own fields.
/// Re-insertion of an existing name replaces the descriptor in place but
/// keeps the original position — the load-bearing tie-break for override
/// semantics. Names are never duplicated.
#[must_use]
pub fn resolve_fields(ancestors: &[&FieldList], own: Vec<Field>) -> FieldList {
    let mut merged: Vec<Field> = Vec::new();

    for list in ancestors {
        for field in list.iter() {
            upsert(&mut merged, field.clone());
        }
    }
    for field in own {
        upsert(&mut merged, field);
    }

    FieldList::from_fields(merged)
}

// Override wins on content, never on position.
fn upsert(merged: &mut Vec<Field>, field: Field) {
    match merged.iter().position(|f| f.name == field.name) {
        Some(index) => merged[index] = field,
        None => merged.push(field),
    }
}

///
/// TESTS
///
