//! Rust code generation for confgen.
//!
//! Turns a field specification into a config struct, its per-field value
//! holder, a fluent builder and, on request, functional options.

mod blocks;
mod config;
mod error;
mod generator;
mod model;
mod rust_file;

pub mod ast;

pub use ast::{Field, Fn, Impl, Param, Struct, TypeAlias};
pub use config::{GeneratorConfig, TypeNames};
pub use error::{Error, Result};
pub use generator::Generator;
pub use model::{ConfigBuilder, ConfigItem, ConfigOption, ConfigStruct};
pub use rust_file::RustFile;
