use reclass_schema::SchemaError;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Construct(#[from] ConstructError),

    #[error("unknown record type {name}")]
    UnknownType { name: String },

    #[error("unknown field {field} on record type {type_name}")]
    UnknownField { type_name: String, field: String },
}

///
/// ConstructError
///
/// Argument-binding failures raised by the synthesized constructor.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConstructError {
    #[error("missing required argument {field}")]
    MissingArgument { field: String },

    #[error("unexpected argument {name}")]
    UnknownArgument { name: String },

    #[error("argument {field} supplied both positionally and by name")]
    DuplicateArgument { field: String },

    #[error("too many positional arguments: expected at most {expected}, got {given}")]
    TooManyPositional { expected: usize, given: usize },
}
