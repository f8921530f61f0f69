//! Generators that turn an entity into files.
//!
//! - [`ModelGenerator`] - the model source, from the `Model` template
//! - [`TestsGenerator`] - the companion tests, from the `Tests` template

mod model;
mod test_suite;

use std::path::{Path, PathBuf};

use modelforge_core::WriteResult;
pub use model::ModelGenerator;
pub use test_suite::TestsGenerator;

use crate::{
    Result,
    field::EntityName,
    template::{Bindings, TemplateStore, Token, render_to, substitute},
};

/// A generator renders one template into one file.
pub trait Generator {
    /// Logical name of the template to render (e.g., "Model")
    fn template_name(&self) -> &'static str;

    /// Destination of the rendered file under the project root
    fn destination(&self, root: &Path) -> PathBuf;

    /// Replacement text for every token this generator fills in
    fn bindings(&self) -> Bindings;

    /// Render the template without writing anything
    fn render(&self, store: &TemplateStore) -> Result<String> {
        let template = store.load(self.template_name())?;
        Ok(substitute(&template, &self.bindings()))
    }

    /// Preview the generated file without writing to disk
    fn preview(&self, root: &Path, store: &TemplateStore) -> Result<PreviewFile> {
        Ok(PreviewFile {
            path: self.destination(root),
            content: self.render(store)?,
        })
    }

    /// Render the template and write it to its destination
    fn generate(&self, root: &Path, store: &TemplateStore) -> Result<WrittenFile> {
        let template = store.load(self.template_name())?;
        let path = self.destination(root);
        let result = render_to(&template, &self.bindings(), &path)?;
        Ok(WrittenFile { path, result })
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Destination path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// A file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Destination path
    pub path: PathBuf,
    /// Whether the file was created or replaced
    pub result: WriteResult,
}

/// Bindings for the entity-level tokens shared by every template.
pub fn entity_bindings(entity: &EntityName) -> Bindings {
    Bindings::new()
        .bind(Token::ClassName, entity.class_name())
        .bind(Token::VariableName, entity.variable_name())
        .bind(Token::TableName, entity.table_name())
}
