use std::path::{Path, PathBuf};

use modelforge_core::Layout;

use super::{Generator, entity_bindings};
use crate::{
    builder::Indent,
    field::{EntityName, FieldSpec},
    fragments::FragmentSet,
    template::{Bindings, MODEL_TEMPLATE, Token},
};

/// Generates `<models_dir>/<ClassName>.<ext>` from the `Model` template.
pub struct ModelGenerator<'a> {
    entity: &'a EntityName,
    fields: &'a [FieldSpec],
    layout: &'a Layout,
    indent: Indent,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(entity: &'a EntityName, fields: &'a [FieldSpec], layout: &'a Layout) -> Self {
        Self {
            entity,
            fields,
            layout,
            indent: Indent::default(),
        }
    }

    /// Use a different indentation for the per-field fragments.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The per-field fragments this generator substitutes.
    pub fn fragments(&self) -> FragmentSet {
        FragmentSet::synthesize_with(self.indent, self.entity, self.fields)
    }
}

impl Generator for ModelGenerator<'_> {
    fn template_name(&self) -> &'static str {
        MODEL_TEMPLATE
    }

    fn destination(&self, root: &Path) -> PathBuf {
        self.layout.model_path(root, &self.entity.class_name())
    }

    fn bindings(&self) -> Bindings {
        let fragments = self.fragments();
        entity_bindings(self.entity)
            .bind(Token::FieldDeclarations, fragments.declarations)
            .bind(Token::ColumnDefinitions, fragments.column_definitions)
            .bind(Token::KeyConstants, fragments.key_constants)
            .bind(Token::StructuredEncode, fragments.structured_encode)
            .bind(Token::StructuredDecode, fragments.structured_decode)
            .bind(Token::RowDecode, fragments.row_decode)
            .bind(Token::RowEncode, fragments.row_encode)
            .bind(Token::ConstructorParams, fragments.constructor_params)
            .bind(Token::ConstructorBody, fragments.constructor_body)
    }
}
