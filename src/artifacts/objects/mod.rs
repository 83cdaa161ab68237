//! Git object types
//!
//! Every object on disk is stored as `<type> <size>\0<content>` and then
//! zlib-compressed. Only commits are read here, and only their `parent`
//! headers matter for ordering history.

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
