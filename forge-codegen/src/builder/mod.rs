//! Code generation building blocks.
//!
//! - [`FragmentBuilder`] - Accumulates one fragment of indented code
//! - [`Indent`] - Indentation configuration

mod fragment;
mod indent;

pub use fragment::FragmentBuilder;
pub use indent::Indent;
