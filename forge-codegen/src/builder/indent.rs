//! Indentation of generated fragments.

/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// The given number of spaces per level.
    Spaces(u8),
    /// One tab per level.
    Tab,
}

impl Indent {
    /// Four spaces, the Swift convention.
    pub const SWIFT: Self = Self::Spaces(4);

    /// Leading whitespace for the given nesting level.
    pub fn at(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width) * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}
