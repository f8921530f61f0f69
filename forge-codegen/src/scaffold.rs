//! Model scaffolding: the model source followed by its tests.

use std::path::Path;

use modelforge_core::Layout;

use crate::{
    Error, Result,
    field::{EntityName, FIELD_SEPARATOR, FieldSpec, parse_fields},
    generator::{Generator, ModelGenerator, PreviewFile, TestsGenerator, WrittenFile},
    template::TemplateStore,
};

/// An entity name with its field declarations, resolved from positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    entity: EntityName,
    fields: Vec<FieldSpec>,
    ignored: Vec<String>,
}

impl ModelRequest {
    /// Resolve a request from raw positional arguments.
    ///
    /// The first argument is the entity name; every following `name:type`
    /// token is a field. Tokens without a `:` are collected in
    /// [`ModelRequest::ignored`].
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let (name, rest) = match args.split_first() {
            Some((name, rest)) if !name.as_ref().is_empty() => (name.as_ref(), rest),
            _ => return Err(Box::new(Error::MissingArgument { name: "name" })),
        };

        let ignored = rest
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !token.contains(FIELD_SEPARATOR))
            .map(str::to_string)
            .collect();

        Ok(Self {
            entity: EntityName::new(name),
            fields: parse_fields(rest),
            ignored,
        })
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Positional tokens after the name that carry no `:` separator.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}

/// Files written by one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldResult {
    pub model: WrittenFile,
    pub tests: WrittenFile,
}

/// Writes a model and its tests under a project root.
pub struct Scaffold<'a> {
    root: &'a Path,
    layout: &'a Layout,
    store: &'a TemplateStore,
}

impl<'a> Scaffold<'a> {
    pub fn new(root: &'a Path, layout: &'a Layout, store: &'a TemplateStore) -> Self {
        Self {
            root,
            layout,
            store,
        }
    }

    fn model<'r>(&'r self, request: &'r ModelRequest) -> ModelGenerator<'r> {
        ModelGenerator::new(&request.entity, &request.fields, self.layout)
    }

    fn tests<'r>(&'r self, request: &'r ModelRequest) -> TestsGenerator<'r> {
        TestsGenerator::new(&request.entity, self.layout)
    }

    /// Render both files without writing to disk.
    pub fn preview(&self, request: &ModelRequest) -> Result<Vec<PreviewFile>> {
        Ok(vec![
            self.model(request).preview(self.root, self.store)?,
            self.tests(request).preview(self.root, self.store)?,
        ])
    }

    /// Write the model, then its tests.
    ///
    /// The two writes are independent: when the tests fail to generate the
    /// model file is already on disk and stays there.
    pub fn run(&self, request: &ModelRequest) -> Result<ScaffoldResult> {
        let model = self.model(request).generate(self.root, self.store)?;
        let tests = self.tests(request).generate(self.root, self.store)?;
        Ok(ScaffoldResult { model, tests })
    }
}
