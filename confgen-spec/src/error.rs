use std::ops::Range;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for specification parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Name under which the specification shows up in diagnostics.
const SOURCE_NAME: &str = "--field";

/// Source context for error reporting.
///
/// Holds the full specification so every error can point at the
/// offending sub-field.
#[derive(Debug, Clone)]
pub(crate) struct SpecSource {
    src: String,
}

impl SpecSource {
    pub(crate) fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(SOURCE_NAME, self.src.clone())
    }

    pub(crate) fn missing_type(&self, index: usize, field: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::MissingType {
            src: self.named_source(),
            span: span.into(),
            index,
            field: field.to_string(),
        })
    }

    pub(crate) fn invalid_type(
        &self,
        index: usize,
        field: &str,
        message: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeSyntax {
            src: self.named_source(),
            span: span.into(),
            index,
            field: field.to_string(),
            message: message.into(),
        })
    }

    pub(crate) fn invalid_name(
        &self,
        index: usize,
        field: &str,
        name: &str,
        reason: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span: span.into(),
            index,
            field: field.to_string(),
            name: name.to_string(),
            reason: reason.into(),
        })
    }

    pub(crate) fn duplicate_field(
        &self,
        name: &str,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.to_string(),
        })
    }
}

/// A malformed field specification.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("field[{index}] must have a field name and a type: '{field}'")]
    #[diagnostic(
        code(confgen::missing_type),
        help("write each field as `name Type` and separate fields with '|'")
    )]
    MissingType {
        #[source_code]
        src: NamedSource<String>,
        #[label("no type given")]
        span: SourceSpan,
        index: usize,
        field: String,
    },

    #[error("failed to parse field[{index}] '{field}': {message}")]
    #[diagnostic(
        code(confgen::invalid_type),
        help("the type must be a single Rust type, e.g. `Vec<String>` or `Option<Box<dyn std::io::Read>>`")
    )]
    InvalidTypeSyntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: SourceSpan,
        index: usize,
        field: String,
        message: String,
    },

    #[error("invalid field name '{name}' in field[{index}] '{field}'")]
    #[diagnostic(
        code(confgen::invalid_name),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter.")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        index: usize,
        field: String,
        name: String,
        reason: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(confgen::duplicate_field),
        help("field names must stay unique once their first letter is capitalized")
    )]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        name: String,
    },
}

impl Error {
    /// The raw sub-field text the error points at, if it concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingType { field, .. }
            | Self::InvalidTypeSyntax { field, .. }
            | Self::InvalidName { field, .. } => Some(field),
            Self::DuplicateField { .. } => None,
        }
    }
}
