//! Template lookup by logical name.

use std::{
    borrow::Cow,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Logical name of the model template.
pub const MODEL_TEMPLATE: &str = "Model";
/// Logical name of the model tests template.
pub const TESTS_TEMPLATE: &str = "Tests";

/// Templates compiled into the binary, by logical name.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (MODEL_TEMPLATE, include_str!("../../templates/Model.template")),
    (TESTS_TEMPLATE, include_str!("../../templates/Tests.template")),
];

/// File extension of templates on disk.
const TEMPLATE_EXTENSION: &str = "template";

/// Resolves templates from an optional directory, then the built-in set.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: Option<PathBuf>,
    builtins: bool,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateStore {
    /// Only the built-in templates.
    pub fn builtin() -> Self {
        Self {
            dir: None,
            builtins: true,
        }
    }

    /// Only templates found in `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            builtins: false,
        }
    }

    /// Look in `dir` first and fall back to the built-in templates.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Path a template would be read from on disk (e.g., "Templates/Model.template").
    pub fn template_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }

    /// Load the template with the given logical name.
    pub fn load(&self, name: &str) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.dir {
            let path = Self::template_path(dir, name);
            match std::fs::read_to_string(&path) {
                Ok(content) => return Ok(Cow::Owned(content)),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(Error::read(path, e)),
            }
        }

        if self.builtins {
            if let Some(content) = builtin(name) {
                return Ok(Cow::Borrowed(content));
            }
        }

        Err(Box::new(Error::TemplateNotFound {
            name: name.to_string(),
            searched: self.searched(name),
        }))
    }

    fn searched(&self, name: &str) -> String {
        let mut places = Vec::new();
        if let Some(dir) = &self.dir {
            places.push(format!("'{}'", Self::template_path(dir, name).display()));
        }
        if self.builtins {
            places.push("the built-in templates".to_string());
        }
        places.join(" and ")
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_builtin_templates_load() {
        let store = TemplateStore::builtin();
        assert!(store.load(MODEL_TEMPLATE).unwrap().contains("_CLASS_NAME_"));
        assert!(store.load(TESTS_TEMPLATE).unwrap().contains("_CLASS_NAME_Tests"));
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = TemplateStore::builtin().load("Controller").unwrap_err();
        match *err {
            Error::TemplateNotFound { name, searched } => {
                assert_eq!(name, "Controller");
                assert_eq!(searched, "the built-in templates");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directory_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Model.template"), "custom _CLASS_NAME_").unwrap();

        let store = TemplateStore::builtin().with_dir(temp.path());
        assert_eq!(store.load(MODEL_TEMPLATE).unwrap(), "custom _CLASS_NAME_");
        // Tests.template is absent, so the built-in one is used.
        assert!(store.load(TESTS_TEMPLATE).unwrap().contains("XCTest"));
    }

    #[test]
    fn test_directory_only_store_does_not_fall_back() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::directory(temp.path());

        let err = store.load(MODEL_TEMPLATE).unwrap_err();
        match *err {
            Error::TemplateNotFound { searched, .. } => {
                assert!(searched.contains("Model.template"));
                assert!(!searched.contains("built-in"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory_falls_back() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::builtin().with_dir(temp.path().join("does-not-exist"));
        assert!(store.load(MODEL_TEMPLATE).is_ok());
    }
}
