//! Indentation-aware output buffer.

use super::{CodeFragment, Indent, Renderable};

/// Output buffer that tracks indentation while code is appended.
///
/// # Example
///
/// ```
/// use confgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("fn main() {")
///     .push_indent()
///     .push_line("println!(\"Hello\");")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "fn main() {\n    println!(\"Hello\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::rust())
    }

    /// Append `s` at the current depth, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.at(self.depth));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Go back one level; stays at zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append a `///` line; empty text gives a bare `///`.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("///")
        } else {
            self.push_line(&format!("/// {}", text))
        }
    }

    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
            CodeFragment::Braced { header, body } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent().push_line("}");
            }
            CodeFragment::Group(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
