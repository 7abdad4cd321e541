//! String utilities.
//!
//! Provides escaping for C# string literals and identifier checks.

mod as_string;
mod escape;
mod util;

pub use as_string::as_string;
pub use escape::escape;
pub use util::{is_identifier, is_identifier_part, is_identifier_start, is_qualified_name};
