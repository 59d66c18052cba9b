use crate::prelude::*;

///
/// Field
///
/// Resolved schema descriptor for one field. Immutable once the owning
/// type is finalized.
///
/// Invariant: `init == false` implies `default.is_some()` (enforced by
/// the validator before finalization).
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    pub init: bool,
    pub repr: bool,
    pub hash: bool,
    pub compare: bool,

    /// Defensive-copy tag, set at collection time when the default is a
    /// container variant. Generated constructors branch on this tag,
    /// never on runtime identity.
    pub copy_on_default: bool,
}

impl Field {
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

///
/// FieldList
///
/// Ordered, name-unique field schema for one record type: ancestor fields
/// oldest-first, own fields appended, overrides in place.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    // Only the resolver constructs lists; name uniqueness is its contract.
    pub(crate) fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field within resolved order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    ///
    /// FILTERS
    /// one per operation kind; each operation generates against its own
    /// filtered view of the resolved list
    ///

    #[must_use]
    pub fn init_fields(&self) -> Vec<&Field> {
        self.filtered(|f| f.init)
    }

    #[must_use]
    pub fn repr_fields(&self) -> Vec<&Field> {
        self.filtered(|f| f.repr)
    }

    #[must_use]
    pub fn hash_fields(&self) -> Vec<&Field> {
        self.filtered(|f| f.hash)
    }

    #[must_use]
    pub fn compare_fields(&self) -> Vec<&Field> {
        self.filtered(|f| f.compare)
    }

    fn filtered(&self, predicate: impl Fn(&Field) -> bool) -> Vec<&Field> {
        self.fields.iter().filter(|f| predicate(f)).collect()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{
        collect::collect_fields,
        node::{FieldDecl, FieldSpec},
        resolve::resolve_fields,
    };

    fn list(decls: &[(&str, FieldDecl)]) -> super::FieldList {
        let decls = decls
            .iter()
            .map(|(name, decl)| ((*name).to_string(), decl.clone()))
            .collect::<Vec<_>>();

        resolve_fields(&[], collect_fields(&decls))
    }

    #[test]
    fn filters_select_by_participation_flag() {
        let fields = list(&[
            ("a", FieldDecl::Bare),
            ("b", FieldSpec::new().default_value(1i64).compare(false).into()),
            ("c", FieldSpec::new().default_value(2i64).repr(false).into()),
        ]);

        let compare = fields
            .compare_fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(compare, ["a", "c"]);

        let repr = fields
            .repr_fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(repr, ["a", "b"]);

        assert_eq!(fields.init_fields().len(), 3);
        assert_eq!(fields.hash_fields().len(), 3);
    }

    #[test]
    fn resolved_schema_serializes_for_introspection() {
        let fields = list(&[("x", FieldDecl::with_default(1i64))]);
        let json = serde_json::to_value(&fields).expect("schema serializes");

        assert_eq!(json["fields"][0]["name"], "x");
        assert_eq!(json["fields"][0]["default"], serde_json::json!({ "Int": 1 }));
        assert_eq!(json["fields"][0]["copy_on_default"], false);
    }
}
