//! valobj-openapi-util - helpers shared by the source emitters.
//!
//! Everything here operates on C# source text: escaping values that end up
//! inside string literals and checking names that end up as identifiers.

pub mod strings;

pub use strings::{
    as_string, escape, is_identifier, is_identifier_part, is_identifier_start, is_qualified_name,
};
