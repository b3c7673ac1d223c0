//! Fragments sit between syntax nodes and text.
//!
//! Nodes describe themselves as fragments; only [`CodeBuilder`](super::CodeBuilder)
//! knows about indentation and newlines.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// A `///` doc comment line.
    Doc(String),
    /// `header` on its own line, `body` one level deeper, then a closing `}`.
    Braced {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// Fragments kept together, such as one top-level item.
    Group(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// `header` must end with the opening `{`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Braced {
            header: header.into(),
            body,
        }
    }

}

/// A node that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// All fragments of this node as a single group.
    fn to_fragment(&self) -> CodeFragment {
        CodeFragment::Group(self.to_fragments())
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}
