//! Init command report data structures.

use std::path::PathBuf;

use modelforge_codegen::generator::WrittenFile;

use super::{
    generate::render_written,
    output::{Output, Report},
};

/// Report data from project initialization.
#[derive(Debug)]
pub struct InitReport {
    /// Project root.
    pub root: PathBuf,
    /// Config and template files.
    pub files: Vec<WrittenFile>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Initialized modelforge in", &self.root.display().to_string());
        out.section("Files");
        for file in &self.files {
            render_written(out, file);
        }
    }
}
