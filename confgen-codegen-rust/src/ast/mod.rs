//! Rust AST builders for generating structs, impls, functions and type aliases.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod aliases;
mod fns;
mod impls;
mod structs;

pub use aliases::TypeAlias;
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

use confgen_codegen::{CodeBuilder, CodeFragment, Renderable};

fn visibility(is_public: bool) -> &'static str {
    if is_public { "pub " } else { "" }
}

fn attr_lines(attrs: &[String]) -> impl Iterator<Item = CodeFragment> + '_ {
    attrs
        .iter()
        .map(|attr| CodeFragment::Line(format!("#[{}]", attr)))
}

/// Render any node to a string with Rust indentation.
pub(crate) fn render(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::rust();
    builder.emit(node);
    builder.build()
}
