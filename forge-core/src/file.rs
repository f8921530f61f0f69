use std::{
    io,
    path::{Path, PathBuf},
};

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated models and tests)
    #[default]
    Always,
    /// Only create if file doesn't exist (ejected templates, config)
    IfMissing,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (always overwrites)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Set how an existing file at the destination is handled.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> io::Result<WriteResult> {
        let existed = self.exists();
        match self.overwrite {
            Overwrite::IfMissing if existed => Ok(WriteResult::Skipped),
            _ => {
                write_file(&self.path, &self.content)?;
                if existed {
                    Ok(WriteResult::Overwritten)
                } else {
                    Ok(WriteResult::Created)
                }
            }
        }
    }
}
