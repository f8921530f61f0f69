//! Generate operations - write a model with its tests, or the tests alone.

use std::path::Path;

use modelforge_codegen::{
    Result,
    field::EntityName,
    generator::{Generator, TestsGenerator},
    scaffold::{ModelRequest, Scaffold},
};

use super::Project;
use crate::reports::{GenerateReport, GenerationResult};

/// Generate a model and its tests.
///
/// In dry-run mode nothing is written and the rendered files are returned
/// for preview.
pub fn model(project: &Project, request: &ModelRequest, dry_run: bool) -> Result<GenerateReport> {
    let scaffold = Scaffold::new(&project.root, &project.config.layout, &project.store);

    let warnings = request
        .ignored()
        .iter()
        .map(|token| format!("ignoring '{}': fields are written as name:type", token))
        .collect();

    let result = if dry_run {
        GenerationResult::Preview(scaffold.preview(request)?)
    } else {
        let written = scaffold.run(request)?;
        GenerationResult::Written(vec![written.model, written.tests])
    };

    Ok(GenerateReport {
        subject: format!("Model '{}'", request.entity()),
        fields: Some(request.fields().iter().map(|f| f.to_string()).collect()),
        warnings,
        result,
    })
}

/// Generate the tests for an entity alone.
///
/// `dir` replaces the configured tests directory.
pub fn test_suite(
    project: &Project,
    entity: &EntityName,
    dir: Option<&Path>,
    dry_run: bool,
) -> Result<GenerateReport> {
    let mut generator = TestsGenerator::new(entity, &project.config.layout);
    if let Some(dir) = dir {
        generator = generator.in_dir(dir);
    }

    let result = if dry_run {
        GenerationResult::Preview(vec![generator.preview(&project.root, &project.store)?])
    } else {
        GenerationResult::Written(vec![generator.generate(&project.root, &project.store)?])
    };

    Ok(GenerateReport {
        subject: format!("Tests for '{}'", entity),
        fields: None,
        warnings: Vec::new(),
        result,
    })
}
