mod decl;
mod field;

pub use decl::{FieldDecl, FieldSpec};
pub use field::{Field, FieldList};
