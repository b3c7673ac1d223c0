//! A single parsed field.

use std::ops::Range;

/// One `name Type` pair of the specification.
///
/// The same field shows up in every generated block: as a public config
/// member (`public_name`), a private builder member (`private_name`) and
/// with its verbatim type (`ty`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    public_name: String,
    private_name: String,
    ty: String,
    span: Range<usize>,
}

impl Field {
    pub(crate) fn new(
        public_name: String,
        private_name: String,
        ty: impl Into<String>,
        span: Range<usize>,
    ) -> Self {
        Self {
            public_name,
            private_name,
            ty: ty.into(),
            span,
        }
    }

    /// Capitalized name, used for config members, setters and option functions.
    pub fn public_name(&self) -> &str {
        &self.public_name
    }

    /// Decapitalized name, used for builder members.
    ///
    /// Reserved words come back as raw identifiers (`r#type`).
    pub fn private_name(&self) -> &str {
        &self.private_name
    }

    /// The field's type expression as written in the specification.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Byte range of the sub-field inside the specification.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Turn a name into something usable as a Rust identifier.
///
/// Keywords become raw identifiers; the few that cannot be raw get a
/// trailing underscore instead.
pub(crate) fn rust_ident(name: &str) -> String {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        return name.to_string();
    }
    match name {
        "self" | "super" | "crate" | "Self" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Whether `name` is a plain (non-keyword) Rust identifier.
pub(crate) fn is_ident(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}
