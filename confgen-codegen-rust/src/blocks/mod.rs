//! One emitter per model entity.
//!
//! Each entity renders its own block; the [`Generator`](crate::Generator)
//! decides the order. Blocks never reference each other directly, only
//! through the shared model, so names stay consistent across all of them.

mod builder;
mod config;
mod item;
mod option;

use confgen_codegen::{CodeFragment, Renderable};

// Std types are spelled out in full so a generated type named `Option`
// cannot shadow them.
const STD_OPTION: &str = "::core::option::Option";
const STD_BOX: &str = "::std::boxed::Box";
const STD_BOOL: &str = "::core::primitive::bool";
const STD_FN_ONCE: &str = "::core::ops::FnOnce";
const STD_INTO_ITERATOR: &str = "::core::iter::IntoIterator";

/// Render items one after another with a blank line between them.
fn items(nodes: &[&dyn Renderable]) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            fragments.push(CodeFragment::Blank);
        }
        fragments.extend(node.to_fragments());
    }
    fragments
}
