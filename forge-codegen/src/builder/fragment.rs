//! Accumulator for one fragment of generated code.

use super::Indent;

/// How consecutive entries are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joiner {
    /// Every entry is followed by the terminator (statement lines).
    Terminate(&'static str),
    /// Entries after the first are preceded by the separator (argument lists).
    Separate(&'static str),
}

/// Builds one fragment, one entry per field.
///
/// Entries are indented to a fixed level because the surrounding template
/// decides where the fragment lands. The first entry's indentation is
/// trimmed off by [`FragmentBuilder::build`], so templates place the token
/// at the indentation they want the first line to have.
///
/// # Example
///
/// ```
/// use modelforge_codegen::builder::{FragmentBuilder, Indent};
///
/// let mut params = FragmentBuilder::new(Indent::SWIFT).separated(", ");
/// params.push(true, "title:String");
/// params.push(false, "viewCount:Int");
///
/// assert_eq!(params.build(), "title:String, viewCount:Int");
/// ```
#[derive(Debug, Clone)]
pub struct FragmentBuilder {
    indent: Indent,
    level: usize,
    joiner: Joiner,
    buffer: String,
}

impl FragmentBuilder {
    /// Create a builder for newline-terminated lines at level 0.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            joiner: Joiner::Terminate("\n"),
            buffer: String::new(),
        }
    }

    /// Set the indentation level of every entry.
    pub fn level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Join entries with `separator` instead of terminating each line.
    pub fn separated(mut self, separator: &'static str) -> Self {
        self.joiner = Joiner::Separate(separator);
        self
    }

    /// Append one entry.
    ///
    /// `first` must be true for the first field only; it is shared by every
    /// fragment built in the same pass.
    pub fn push(&mut self, first: bool, text: &str) {
        if let Joiner::Separate(separator) = self.joiner {
            if !first {
                self.buffer.push_str(separator);
            }
        }
        self.buffer.push_str(&self.indent.at(self.level));
        self.buffer.push_str(text);
        if let Joiner::Terminate(terminator) = self.joiner {
            self.buffer.push_str(terminator);
        }
    }

    /// Consume the builder and return the trimmed fragment.
    pub fn build(self) -> String {
        self.buffer.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_terminated_and_trimmed() {
        let mut b = FragmentBuilder::new(Indent::SWIFT).level(2);
        b.push(true, "self.title = title");
        b.push(false, "self.viewCount = viewCount");

        assert_eq!(
            b.build(),
            "self.title = title\n        self.viewCount = viewCount"
        );
    }

    #[test]
    fn test_separated_entries() {
        let mut b = FragmentBuilder::new(Indent::SWIFT).level(3).separated(",\n");
        b.push(true, "a: 1");
        b.push(false, "b: 2");
        b.push(false, "c: 3");

        assert_eq!(
            b.build(),
            "a: 1,\n            b: 2,\n            c: 3"
        );
    }

    #[test]
    fn test_single_entry_has_no_separator() {
        let mut b = FragmentBuilder::new(Indent::SWIFT).separated(", ");
        b.push(true, "title:String");

        assert_eq!(b.build(), "title:String");
    }

    #[test]
    fn test_empty_builder() {
        let b = FragmentBuilder::new(Indent::Tab).level(1);
        assert_eq!(b.build(), "");
    }

    #[test]
    fn test_tab_indentation() {
        let mut b = FragmentBuilder::new(Indent::Tab).level(1);
        b.push(true, "var a: A");
        b.push(false, "var b: B");

        assert_eq!(b.build(), "var a: A\n\tvar b: B");
    }
}
