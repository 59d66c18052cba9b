use crate::{
    error::Error,
    record::{RecordDecl, RecordOptions, RecordType},
};
use reclass_schema::{collect::collect_fields, resolve::resolve_fields, validate::validate_own_fields};
use std::{
    collections::HashMap,
    sync::{LazyLock, RwLock},
};

///
/// REGISTRY
/// process-wide table of finalized record types, keyed by type name.
/// Membership doubles as the "previously finalized" marker ancestor
/// resolution checks against.
///

static REGISTRY: LazyLock<RwLock<HashMap<String, RecordType>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Finalize a record declaration into a registered runtime type.
///
/// Collection, validation, ancestor resolution and operation synthesis
/// run in order; any failure aborts before registration, so a type is
/// never visible with a partial operation table. Re-finalizing a name
/// replaces the previous type wholesale; existing instances keep their
/// old type handle and become incomparable with new ones.
///
/// Ancestors not registered are treated as non-record names and
/// contribute no fields.
pub fn finalize(decl: &RecordDecl, options: RecordOptions) -> Result<RecordType, Error> {
    let own = collect_fields(&decl.fields);
    validate_own_fields(&own)?;

    let ancestors = {
        let registry = REGISTRY.read().expect("record registry lock poisoned");
        decl.ancestors
            .iter()
            .filter_map(|name| registry.get(name).cloned())
            .collect::<Vec<_>>()
    };
    let ancestor_fields = ancestors.iter().map(RecordType::fields).collect::<Vec<_>>();

    let fields = resolve_fields(&ancestor_fields, own);
    let ty = RecordType::synthesize(decl.name.clone(), fields, options);

    REGISTRY
        .write()
        .expect("record registry lock poisoned")
        .insert(decl.name.clone(), ty.clone());

    Ok(ty)
}

/// Look up a finalized type by name.
#[must_use]
pub fn lookup(name: &str) -> Option<RecordType> {
    REGISTRY
        .read()
        .expect("record registry lock poisoned")
        .get(name)
        .cloned()
}

/// Look up a finalized type by name, erroring when it was never
/// finalized. For callers that treat the absence as a failure rather
/// than a branch.
pub fn require(name: &str) -> Result<RecordType, Error> {
    lookup(name).ok_or_else(|| Error::UnknownType {
        name: name.to_string(),
    })
}

///
/// TESTS
///
/// Registered names are process-global and tests run in parallel, so
/// every test registers under names unique to it.
///
