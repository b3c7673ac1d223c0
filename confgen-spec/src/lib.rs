//! Field specification parsing for confgen.
//!
//! A specification is a list of `name Type` pairs separated by `|`:
//!
//! ```
//! let fields = confgen_spec::parse_fields("size usize|Handler Option<fn(i32)>").unwrap();
//!
//! assert_eq!(fields[0].public_name(), "Size");
//! assert_eq!(fields[0].private_name(), "size");
//! assert_eq!(fields[1].ty(), "Option<fn(i32)>");
//! ```
//!
//! Types are validated against Rust's type grammar but otherwise passed
//! through untouched.

mod error;
mod field;
mod parse;

pub use error::{Error, Result};
pub use field::Field;
pub use parse::{FIELD_SEPARATOR, parse_fields};
