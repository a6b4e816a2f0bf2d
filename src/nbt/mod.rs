//! The NBT ("Named Binary Tag") tree format: the raw tag model, the
//! wire codec, and the serde binder that maps tag trees onto record
//! types.

pub mod tag;
pub mod io;
pub mod macros;
pub mod ser;
pub mod de;

/// Compounds preserve the order that entries appear on the wire, so the
/// map type must be insertion-ordered.
pub type Map = indexmap::IndexMap<String, tag::Tag>;

/// Recursion bound for reading and writing tag trees. A document nested
/// deeper than this fails with [crate::McError::TagTooDeep].
pub const MAX_DEPTH: usize = 512;

pub use tag::{Tag, TagID, ListTag, NamedTag};
pub use io::{read_named_tag, write_named_tag};
pub use ser::{to_tag, to_vec, to_writer};
pub use de::{from_tag, from_bytes, from_reader, from_reader_named};
