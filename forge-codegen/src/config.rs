//! Project configuration (`forge.toml`).

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use modelforge_core::Layout;
use serde::Deserialize;

use crate::{Error, Result, template::TemplateStore};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "forge.toml";

/// Templates directory written into [`DEFAULT_CONFIG`].
pub const DEFAULT_TEMPLATES_DIR: &str = "Resources/Templates";

/// Configuration written by `forge init`.
pub const DEFAULT_CONFIG: &str = r#"# modelforge configuration

[layout]
models_dir = "Sources/App/Models"
tests_dir = "Tests/AppTests/Models"
extension = "swift"

[templates]
# Templates in this directory take precedence over the built-in ones.
dir = "Resources/Templates"
"#;

/// Parsed `forge.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: Layout,
    pub templates: TemplatesConfig,
}

/// The `[templates]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory of `<Name>.template` files, relative to the project root.
    pub dir: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse configuration with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    /// Parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a configuration file, or use the defaults when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::read(path, e)),
        }
    }

    /// Template store for a project rooted at `root`.
    ///
    /// A configured templates directory is searched first, then the
    /// built-in templates.
    pub fn template_store(&self, root: &Path) -> TemplateStore {
        match &self.templates.dir {
            Some(dir) => TemplateStore::builtin().with_dir(root.join(dir)),
            None => TemplateStore::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::template::MODEL_TEMPLATE;

    #[test]
    fn test_default_config() {
        let config: Config = DEFAULT_CONFIG.parse().unwrap();
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.templates.dir, Some(PathBuf::from(DEFAULT_TEMPLATES_DIR)));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.templates.dir, None);
    }

    #[test]
    fn test_custom_layout() {
        let config: Config = r#"
            [layout]
            models_dir = "Sources/Models"
            extension = "kt"

            [templates]
            dir = "templates"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.layout.models_dir, PathBuf::from("Sources/Models"));
        assert_eq!(config.layout.tests_dir, Layout::default().tests_dir);
        assert_eq!(config.layout.extension, "kt");
        assert_eq!(config.templates.dir, Some(PathBuf::from("templates")));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Config::from_str_with_filename("[layout]\nmodels_dir = 3\n", "custom.toml")
            .unwrap_err();
        match *err {
            Error::ConfigParse { span, filename, .. } => {
                assert!(span.is_some());
                assert_eq!(filename, "custom.toml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result: Result<Config> = "[generators]\nmodel = true\n".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_open_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::open_or_default(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(*err, Error::Read { .. }));
    }

    #[test]
    fn test_template_store_uses_configured_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("templates")).unwrap();
        fs::write(temp.path().join("templates/Model.template"), "custom").unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[templates]\ndir = \"templates\"\n",
        )
        .unwrap();

        let config = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap();
        let store = config.template_store(temp.path());
        assert_eq!(store.load(MODEL_TEMPLATE).unwrap(), "custom");
    }
}
