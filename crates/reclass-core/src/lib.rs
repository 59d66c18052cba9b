//! Core runtime for reclass: finalized record types and instances, the
//! method synthesizer, the emission backend that interprets generated
//! operation bodies, and the finalization registry.

pub mod comparison;
pub mod emit;
pub mod error;
pub mod record;
pub mod registry;

mod synth;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        comparison::Comparison,
        error::{ConstructError, Error},
        record::{Args, Record, RecordDecl, RecordOptions, RecordType},
        registry::{finalize, lookup, require},
    };
    pub use reclass_schema::node::{FieldDecl, FieldSpec};
    pub use reclass_types::{Float64, Value};
}
