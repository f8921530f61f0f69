//! Template placeholders and substitution.
//!
//! Templates are plain text containing placeholder tokens such as
//! `_CLASS_NAME_`. Rendering replaces every occurrence of each bound token in
//! a single left-to-right scan; replacement text is never rescanned, so a
//! fragment that happens to contain a token literal is emitted as is.

mod store;

use std::{fmt, path::Path};

use indexmap::IndexMap;
use modelforge_core::{File, WriteResult};

pub use store::{BUILTIN_TEMPLATES, MODEL_TEMPLATE, TESTS_TEMPLATE, TemplateStore};

use crate::{Error, Result};

/// Every token literal starts with this character.
const TOKEN_SIGIL: char = '_';

/// The closed set of placeholders a template may contain.
///
/// Anything else in a template, including look-alike tokens, is copied
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    ClassName,
    VariableName,
    TableName,
    FieldDeclarations,
    ColumnDefinitions,
    KeyConstants,
    StructuredEncode,
    StructuredDecode,
    RowDecode,
    RowEncode,
    ConstructorParams,
    ConstructorBody,
}

impl Token {
    pub const ALL: [Token; 12] = [
        Token::ClassName,
        Token::VariableName,
        Token::TableName,
        Token::FieldDeclarations,
        Token::ColumnDefinitions,
        Token::KeyConstants,
        Token::StructuredEncode,
        Token::StructuredDecode,
        Token::RowDecode,
        Token::RowEncode,
        Token::ConstructorParams,
        Token::ConstructorBody,
    ];

    /// The literal text of the token as it appears in templates.
    pub fn literal(self) -> &'static str {
        match self {
            Token::ClassName => "_CLASS_NAME_",
            Token::VariableName => "_IVAR_NAME_",
            Token::TableName => "_DB_TABLE_NAME_",
            Token::FieldDeclarations => "_IVARS_DEFINITION_",
            Token::ColumnDefinitions => "_TABLE_ROWS_DEFINITION_",
            Token::KeyConstants => "_KEYS_DEFINITION_",
            Token::StructuredEncode => "_CLASS_TO_JSON_",
            Token::StructuredDecode => "_CLASS_JSON_INIT_",
            Token::RowDecode => "_FLUENT_INITIALIZER_",
            Token::RowEncode => "_FLUENT_SERIALIZE_",
            Token::ConstructorParams => "_DEFAULT_INIT_PARAMS_",
            Token::ConstructorBody => "_DEFAULT_INIT_IMPLEMENTATION_",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Replacement text for each bound token, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: IndexMap<Token, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a token, replacing any previous value.
    pub fn bind(mut self, token: Token, value: impl Into<String>) -> Self {
        self.values.insert(token, value.into());
        self
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values.get(&token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.values.iter().map(|(token, value)| (*token, value.as_str()))
    }

    /// The longest bound token that `text` starts with.
    fn match_at(&self, text: &str) -> Option<(Token, &str)> {
        self.iter()
            .filter(|(token, _)| text.starts_with(token.literal()))
            .max_by_key(|(token, _)| token.literal().len())
    }
}

/// Replace every occurrence of every bound token in `template`.
///
/// Unbound tokens and unknown text are left verbatim.
pub fn substitute(template: &str, bindings: &Bindings) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(TOKEN_SIGIL) {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match bindings.match_at(candidate) {
            Some((token, value)) => {
                output.push_str(value);
                rest = &candidate[token.literal().len()..];
            }
            None => {
                output.push(TOKEN_SIGIL);
                rest = &candidate[TOKEN_SIGIL.len_utf8()..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Substitute `bindings` into `template` and write the result to `path`.
///
/// Parent directories are created; an existing file is overwritten.
pub fn render_to(template: &str, bindings: &Bindings, path: &Path) -> Result<WriteResult> {
    File::new(path, substitute(template, bindings))
        .write()
        .map_err(|e| Error::io(path, e))
}
