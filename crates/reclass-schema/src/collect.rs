use crate::prelude::*;
use reclass_types::Value;

/// Field Collector: convert one type's own ordered declarations into
/// resolved field descriptors. Ancestors are not visible here.
///
/// A plain default becomes a fully-participating field; an explicit
/// [`FieldSpec`] is used verbatim. The `Spec` configuration object is
/// consumed in this step — downstream consumers only ever see the
/// resolved descriptor and its plain default value.
#[must_use]
pub fn collect_fields(decls: &[(String, FieldDecl)]) -> Vec<Field> {
    decls
        .iter()
        .map(|(name, decl)| collect_field(name, decl))
        .collect()
}

fn collect_field(name: &str, decl: &FieldDecl) -> Field {
    let (default, init, repr, hash, compare) = match decl {
        FieldDecl::Bare => (None, true, true, true, true),
        FieldDecl::Default(value) => (Some(value.clone()), true, true, true, true),
        FieldDecl::Spec(spec) => (
            spec.default.clone(),
            spec.init,
            spec.repr,
            spec.hash,
            spec.compare,
        ),
    };

    let copy_on_default = default.as_ref().is_some_and(Value::is_container);

    Field {
        name: name.to_string(),
        default,
        init,
        repr,
        hash,
        compare,
        copy_on_default,
    }
}

///
/// TESTS
///
