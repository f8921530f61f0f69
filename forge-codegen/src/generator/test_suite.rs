use std::path::{Path, PathBuf};

use modelforge_core::Layout;

use super::{Generator, entity_bindings};
use crate::{
    field::EntityName,
    template::{Bindings, TESTS_TEMPLATE},
};

/// Generates `<tests_dir>/<ClassName>Tests.<ext>` from the `Tests` template.
///
/// Only the entity name is needed; fields play no part in the tests scaffold.
pub struct TestsGenerator<'a> {
    entity: &'a EntityName,
    layout: &'a Layout,
    dir: Option<&'a Path>,
}

impl<'a> TestsGenerator<'a> {
    pub fn new(entity: &'a EntityName, layout: &'a Layout) -> Self {
        Self {
            entity,
            layout,
            dir: None,
        }
    }

    /// Write into `dir` (relative to the project root) instead of the layout's tests directory.
    pub fn in_dir(mut self, dir: &'a Path) -> Self {
        self.dir = Some(dir);
        self
    }
}

impl Generator for TestsGenerator<'_> {
    fn template_name(&self) -> &'static str {
        TESTS_TEMPLATE
    }

    fn destination(&self, root: &Path) -> PathBuf {
        let class_name = self.entity.class_name();
        match self.dir {
            Some(dir) => root
                .join(dir)
                .join(self.layout.tests_file_name(&class_name)),
            None => self.layout.tests_path(root, &class_name),
        }
    }

    fn bindings(&self) -> Bindings {
        entity_bindings(self.entity)
    }
}
