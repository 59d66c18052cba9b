//! ## Crate layout
//! - `core`: finalized record types, instances, the method synthesizer and
//!   the interpreted emission backend, plus the finalization registry.
//! - `schema`: field declarations, the collector, the ancestor-schema
//!   resolver, and the declaration validator.
//! - `types`: the dynamic `Value` model, canonical ordering and hashing.
//!
//! The `prelude` module mirrors the surface a declaring caller uses:
//! declare fields, finalize the type, construct and compare records.

pub use reclass_core as core;
pub use reclass_schema as schema;
pub use reclass_types as types;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use reclass_core::error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::{
            comparison::Comparison,
            emit::OpKind,
            error::{ConstructError, Error},
            record::{Args, Record, RecordDecl, RecordOptions, RecordType},
            registry::{finalize, lookup, require},
        },
        schema::{
            SchemaError,
            node::{Field, FieldDecl, FieldList, FieldSpec},
        },
        types::{Float64, Value},
    };
    pub use serde::Serialize;
}

///
/// TESTS
///
