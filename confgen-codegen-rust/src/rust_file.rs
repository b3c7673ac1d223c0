//! RustFile abstraction for structured Rust file generation.
//!
//! A file is an optional header comment followed by top-level items,
//! each item separated from the next by one blank line.

use confgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a generated Rust file.
///
/// # Example
///
/// ```
/// use confgen_codegen_rust::{RustFile, Struct};
///
/// let code = RustFile::new()
///     .header("// Code generated; DO NOT EDIT.")
///     .add(Struct::new("A"))
///     .add(Struct::new("B"))
///     .render();
///
/// assert_eq!(
///     code,
///     "// Code generated; DO NOT EDIT.\n\npub struct A {}\n\npub struct B {}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    header: Vec<String>,
    body: Vec<CodeFragment>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header line, emitted verbatim before any item.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add a top-level item.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragment());
        self
    }

    /// Append the file to `builder`.
    pub fn render_into(&self, builder: &mut CodeBuilder) {
        builder.emit(self);
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();
        self.render_into(&mut builder);
        builder.build()
    }
}

impl Renderable for RustFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.header.iter().cloned().map(CodeFragment::Line).collect();

        for (i, item) in self.body.iter().enumerate() {
            if i > 0 || !self.header.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
            fragments.push(item.clone());
        }

        fragments
    }
}
