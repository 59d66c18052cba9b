//! Dynamic value model for reclass records: the `Value` enum, its canonical
//! ordering and hashing surfaces, and the finite [`Float64`] wrapper that
//! keeps values `Eq`-sound.

pub mod float;
pub mod value;

pub use float::Float64;
pub use value::{MapValueError, Value};
