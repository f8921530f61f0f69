use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for modelforge-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing required argument <{name}>")]
    #[diagnostic(
        code(forge::missing_argument),
        help("pass the entity name first, e.g. 'forge model post title:string viewCount:int'")
    )]
    MissingArgument { name: &'static str },

    #[error("template '{name}' not found")]
    #[diagnostic(
        code(forge::template_not_found),
        help("looked in {searched}; run 'forge init' to eject the built-in templates")
    )]
    TemplateNotFound { name: String, searched: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(forge::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(forge::io),
        help("check that the output directory is writable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(forge::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Read {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
