//! Indentation unit used by [`CodeBuilder`](super::CodeBuilder).

/// The text written once per indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent {
    unit: String,
}

impl Indent {
    pub fn spaces(width: usize) -> Self {
        Self {
            unit: " ".repeat(width),
        }
    }

    /// Four spaces, as `rustfmt` writes it.
    pub fn rust() -> Self {
        Self::spaces(4)
    }

    /// Leading whitespace for `depth` levels.
    pub fn at(&self, depth: usize) -> String {
        self.unit.repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::rust()
    }
}
