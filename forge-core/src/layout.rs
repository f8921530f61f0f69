//! Output layout for generated artifacts.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default directory for model sources, relative to the project root.
pub const DEFAULT_MODELS_DIR: &str = "Sources/App/Models";
/// Default directory for model tests, relative to the project root.
pub const DEFAULT_TESTS_DIR: &str = "Tests/AppTests/Models";
/// Default file extension (without dot) of generated sources.
pub const DEFAULT_EXTENSION: &str = "swift";

/// Where generated files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Directory for model files (e.g., "Sources/App/Models")
    pub models_dir: PathBuf,
    /// Directory for test files (e.g., "Tests/AppTests/Models")
    pub tests_dir: PathBuf,
    /// File extension without dot (e.g., "swift")
    pub extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            tests_dir: PathBuf::from(DEFAULT_TESTS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Layout {
    /// File name of a model source (e.g., "Post.swift").
    pub fn model_file_name(&self, class_name: &str) -> String {
        format!("{}.{}", class_name, self.extension)
    }

    /// File name of a model test source (e.g., "PostTests.swift").
    pub fn tests_file_name(&self, class_name: &str) -> String {
        format!("{}Tests.{}", class_name, self.extension)
    }

    /// Full path of a model source under `root`.
    pub fn model_path(&self, root: &Path, class_name: &str) -> PathBuf {
        root.join(&self.models_dir)
            .join(self.model_file_name(class_name))
    }

    /// Full path of a model test source under `root`.
    pub fn tests_path(&self, root: &Path, class_name: &str) -> PathBuf {
        root.join(&self.tests_dir)
            .join(self.tests_file_name(class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let layout = Layout::default();
        assert_eq!(
            layout.model_path(Path::new("app"), "Post"),
            PathBuf::from("app/Sources/App/Models/Post.swift")
        );
        assert_eq!(
            layout.tests_path(Path::new("app"), "Post"),
            PathBuf::from("app/Tests/AppTests/Models/PostTests.swift")
        );
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let layout: Layout = toml::from_str(r#"extension = "kt""#).unwrap();
        assert_eq!(layout.extension, "kt");
        assert_eq!(layout.models_dir, PathBuf::from(DEFAULT_MODELS_DIR));
        assert_eq!(layout.model_file_name("Post"), "Post.kt");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<Layout, _> = toml::from_str(r#"model_dir = "src""#);
        assert!(result.is_err());
    }
}
