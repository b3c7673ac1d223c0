//! Rust impl block builder.

use confgen_codegen::{CodeFragment, Renderable};

use super::{Fn, attr_lines};

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Vec<String>,
    attrs: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: Vec::new(),
            attrs: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a generic parameter declared on the impl (e.g., `impl<T>`).
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        super::render(self)
    }

    /// Format the impl header.
    fn format_header(&self) -> String {
        if self.generics.is_empty() {
            format!("impl {} {{", self.type_name)
        } else {
            format!("impl<{}> {} {{", self.generics.join(", "), self.type_name)
        }
    }

    /// Convert methods to code fragments, separated by blank lines.
    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = attr_lines(&self.attrs).collect();
        fragments.push(CodeFragment::braced(
            self.format_header(),
            self.methods_to_fragments(),
        ));
        fragments
    }
}
