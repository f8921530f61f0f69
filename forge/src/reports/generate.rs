//! Generation report data structures.

use modelforge_codegen::generator::{PreviewFile, WrittenFile};
use modelforge_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a model or tests generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// What was generated (e.g., "Model 'post'").
    pub subject: String,
    /// Field declarations as written, if the generator takes fields.
    pub fields: Option<Vec<String>>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.fields {
            Some(fields) if fields.is_empty() => {
                out.preformatted(&format!("{} with no fields", self.subject))
            }
            Some(fields) => out.preformatted(&format!(
                "{} with fields {}",
                self.subject,
                fields.join(", ")
            )),
            None => out.preformatted(&self.subject),
        }

        match &self.result {
            GenerationResult::Written(files) => {
                for file in files {
                    render_written(out, file);
                }
            }
            GenerationResult::Preview(files) => {
                out.newline();
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

/// Render one written file as an added, updated or skipped item.
pub fn render_written(out: &mut dyn Output, file: &WrittenFile) {
    let path = file.path.display().to_string();
    match file.result {
        WriteResult::Created => out.added_item(&path),
        WriteResult::Overwritten => out.updated_item(&path),
        WriteResult::Skipped => out.skipped_item(&format!("{} (exists)", path)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            subject: "Model 'post'".to_string(),
            fields: Some(vec!["title:string".to_string(), "viewCount:int".to_string()]),
            warnings: vec!["ignoring 'draft'".to_string()],
            result: GenerationResult::Written(vec![
                WrittenFile {
                    path: PathBuf::from("Sources/App/Models/Post.swift"),
                    result: WriteResult::Created,
                },
                WrittenFile {
                    path: PathBuf::from("Tests/AppTests/Models/PostTests.swift"),
                    result: WriteResult::Overwritten,
                },
            ]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: ignoring 'draft'",
                "Model 'post' with fields title:string, viewCount:int",
                "+ Sources/App/Models/Post.swift",
                "~ Tests/AppTests/Models/PostTests.swift",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            subject: "Tests for 'post'".to_string(),
            fields: None,
            warnings: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: PathBuf::from("PostTests.swift"),
                content: "class PostTests {}".to_string(),
            }]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Tests for 'post'",
                "",
                "-- PostTests.swift --",
                "class PostTests {}",
                "-- Summary --",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_render_without_fields() {
        let report = GenerateReport {
            subject: "Model 'category'".to_string(),
            fields: Some(Vec::new()),
            warnings: Vec::new(),
            result: GenerationResult::Written(Vec::new()),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, ["Model 'category' with no fields"]);
    }
}
