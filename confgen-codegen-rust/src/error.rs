use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator construction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Spec(confgen_spec::Error),

    #[error("invalid {role} type name '{name}'")]
    #[diagnostic(
        code(confgen::invalid_type_name),
        help("type names (including any prefix) must be valid Rust identifiers")
    )]
    InvalidTypeName { role: &'static str, name: String },

    #[error("{role} type name '{name}' is the item's generic parameter")]
    #[diagnostic(
        code(confgen::reserved_type_name),
        help("pick another name; the item type is declared as `{name}<{name}>` otherwise")
    )]
    ReservedTypeName { role: &'static str, name: String },

    #[error("the {first} and {second} types are both named '{name}'")]
    #[diagnostic(
        code(confgen::duplicate_type_name),
        help("give each generated type its own name")
    )]
    DuplicateTypeName {
        first: &'static str,
        second: &'static str,
        name: String,
    },
}

impl Error {
    pub(crate) fn spec(err: Box<confgen_spec::Error>) -> Box<Self> {
        Box::new(Self::Spec(*err))
    }
}
