//! Rust type alias builder.

use confgen_codegen::{CodeFragment, Renderable};

/// Builder for `type Name = Target;` declarations.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    target: String,
    doc: Option<String>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc.clone()));
        }
        fragments.push(CodeFragment::Line(format!(
            "pub type {} = {};",
            self.name, self.target
        )));
        fragments
    }
}
