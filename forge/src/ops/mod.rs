//! Core operations.
//!
//! This module contains the business logic for forge commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;

use std::path::{Path, PathBuf};

use modelforge_codegen::{
    Result,
    config::{CONFIG_FILE, Config},
    template::TemplateStore,
};

pub use generate::{model, test_suite};
pub use init::init;

/// A project root with its resolved configuration and templates.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub store: TemplateStore,
}

impl Project {
    /// Load the project at `root`.
    ///
    /// An explicit `config_path` must exist; otherwise `<root>/forge.toml`
    /// is read when present. A `templates` directory, relative to `root`
    /// like the configured one, takes precedence over it.
    pub fn open(root: &Path, config_path: Option<&Path>, templates: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)?,
            None => Config::open_or_default(root.join(CONFIG_FILE))?,
        };

        let store = match templates {
            Some(dir) => TemplateStore::builtin().with_dir(root.join(dir)),
            None => config.template_store(root),
        };

        Ok(Self {
            root: root.to_path_buf(),
            config,
            store,
        })
    }
}
