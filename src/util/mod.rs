//! Hashing, varint and serialization helpers.

mod hash256;
mod result;
mod serdes;
pub mod var_int;

pub use self::hash256::{Hash256, sha256d};
pub use self::result::{Error, Result};
pub use self::serdes::Serializable;
