//! Schema layer for reclass: field declarations, resolved field
//! descriptors, the collector that normalizes declarations, the resolver
//! that merges ancestor schemas, and the declaration validator.

pub mod collect;
pub mod node;
pub mod resolve;
pub mod validate;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        SchemaError,
        node::{Field, FieldDecl, FieldList, FieldSpec},
    };
    pub use reclass_types::Value;
    pub use serde::Serialize;
}

///
/// SchemaError
///
/// Declaration-time violations. Either kind aborts finalization of the
/// type entirely; no partial set of operations is attached.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("non-default field {field} follows a default field")]
    NonDefaultAfterDefault { field: String },

    #[error("field {field} has init disabled but no default value")]
    InitWithoutDefault { field: String },
}
