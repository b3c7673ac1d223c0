//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware output buffer
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for nodes that become fragments
//! - [`Indent`] - Indentation unit

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
