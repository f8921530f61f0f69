//! Model scaffolding engine for the modelforge generator.
//!
//! Turns an entity name and a list of `name:type` declarations into a model
//! source file and a companion tests file by substituting synthesized code
//! fragments into templates.
//!
//! # Module Organization
//!
//! - [`field`] - Field declarations and entity naming (FieldSpec, EntityName)
//! - [`fragments`] - Per-field fragment synthesis (FragmentSet)
//! - [`builder`] - Fragment building blocks (FragmentBuilder, Indent)
//! - [`template`] - Placeholder tokens, substitution and template lookup
//! - [`generator`] - Model and tests generators
//! - [`scaffold`] - The model-then-tests orchestration
//! - [`config`] - `forge.toml` loading
//!
//! # Example
//!
//! ```
//! use modelforge_codegen::{
//!     field::{EntityName, parse_fields},
//!     fragments::FragmentSet,
//! };
//!
//! let fragments = FragmentSet::synthesize(
//!     &EntityName::new("post"),
//!     &parse_fields(&["title:string", "viewCount:int"]),
//! );
//!
//! assert_eq!(fragments.constructor_params, "title:String, viewCount:Int");
//! ```

pub mod builder;
pub mod config;
mod error;
pub mod field;
pub mod fragments;
pub mod generator;
pub mod scaffold;
pub mod template;

pub use error::{Error, Result};
