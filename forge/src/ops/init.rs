//! Init operation - write the default config and eject the built-in templates.

use std::path::Path;

use eyre::{Context, Result};
use modelforge_codegen::{
    config::{CONFIG_FILE, DEFAULT_CONFIG, DEFAULT_TEMPLATES_DIR},
    generator::WrittenFile,
    template::{BUILTIN_TEMPLATES, TemplateStore},
};
use modelforge_core::{File, Overwrite};

use crate::reports::InitReport;

/// Execute the init operation.
///
/// Files that already exist are left untouched. `templates_dir` is relative
/// to `root` and is recorded in the written config.
pub fn init(root: &Path, templates_dir: Option<&Path>) -> Result<InitReport> {
    let (config, templates_dir) = match templates_dir {
        Some(dir) => (
            DEFAULT_CONFIG.replacen(
                &format!("dir = \"{}\"", DEFAULT_TEMPLATES_DIR),
                &format!("dir = {}", toml_string(&dir.display().to_string())),
                1,
            ),
            root.join(dir),
        ),
        None => (DEFAULT_CONFIG.to_string(), root.join(DEFAULT_TEMPLATES_DIR)),
    };

    let mut files = vec![File::new(root.join(CONFIG_FILE), config)];
    files.extend(BUILTIN_TEMPLATES.iter().map(|(name, content)| {
        File::new(TemplateStore::template_path(&templates_dir, name), *content)
    }));

    let files = files
        .into_iter()
        .map(|file| write(file.overwrite(Overwrite::IfMissing)))
        .collect::<Result<Vec<_>>>()?;

    Ok(InitReport {
        root: root.to_path_buf(),
        files,
    })
}

/// A TOML string literal, escaped as needed.
fn toml_string(value: &str) -> toml::Value {
    toml::Value::String(value.to_string())
}

fn write(file: File) -> Result<WrittenFile> {
    let path = file.path().to_path_buf();
    let result = file
        .write()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(WrittenFile { path, result })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use std::path::PathBuf;

    use modelforge_codegen::config::Config;
    use modelforge_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_config_and_templates() {
        let temp = TempDir::new().unwrap();

        let report = init(temp.path(), None).unwrap();

        assert_eq!(report.files.len(), 1 + BUILTIN_TEMPLATES.len());
        assert!(report.files.iter().all(|f| f.result == WriteResult::Created));

        let config = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from(DEFAULT_TEMPLATES_DIR)));

        let model = temp.path().join(DEFAULT_TEMPLATES_DIR).join("Model.template");
        assert!(fs::read_to_string(model).unwrap().contains("_TABLE_ROWS_DEFINITION_"));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[layout]\nextension = \"kt\"\n").unwrap();

        let report = init(temp.path(), Some(Path::new("templates"))).unwrap();

        assert_eq!(report.files[0].result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap(),
            "[layout]\nextension = \"kt\"\n"
        );
        assert!(temp.path().join("templates/Tests.template").exists());
    }

    #[test]
    fn test_init_records_templates_dir() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), Some(Path::new("templates"))).unwrap();

        let config = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from("templates")));
    }

    #[test]
    fn test_init_escapes_templates_dir() {
        let temp = TempDir::new().unwrap();
        let dir = Path::new("my \"tpl\" dir");

        init(temp.path(), Some(dir)).unwrap();

        let config = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.templates.dir, Some(dir.to_path_buf()));
        assert!(temp.path().join(dir).join("Model.template").exists());
    }
}
