//! Core utilities and types for the modelforge generator.
//!
//! This crate provides the naming transforms, the file write primitive and
//! the output layout shared by the code generator and the CLI.

mod file;
mod layout;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Output layout
pub use layout::{DEFAULT_EXTENSION, DEFAULT_MODELS_DIR, DEFAULT_TESTS_DIR, Layout};
// String utilities
pub use utils::{capitalize_first, decapitalize_first, pluralize, to_separator_case};
