//! Field declarations and entity naming.

use std::fmt;

use modelforge_core::{capitalize_first, pluralize, to_separator_case};

/// Separator between a field name and its type (`title:string`).
pub const FIELD_SEPARATOR: char = ':';

/// One `name:type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    declared_type: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    /// Parse a raw token, splitting on the first `:`.
    ///
    /// Returns `None` for tokens without a separator. Everything after the
    /// first separator is kept as the type, so `tags:[String:Int]` has type
    /// `[String:Int]`. Empty names or types are not rejected.
    pub fn parse(token: &str) -> Option<Self> {
        token
            .split_once(FIELD_SEPARATOR)
            .map(|(name, declared_type)| Self::new(name, declared_type))
    }

    /// Field name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type as written.
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// Type used in declarations and signatures (e.g., "string" -> "String").
    pub fn type_name(&self) -> String {
        capitalize_first(&self.declared_type)
    }

    /// Type used by the schema builder (e.g., "String" -> "string").
    pub fn column_type(&self) -> String {
        self.declared_type.to_lowercase()
    }

    /// Storage and lookup key (e.g., "viewCount" -> "view_count").
    pub fn key(&self) -> String {
        to_separator_case(&self.name)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, FIELD_SEPARATOR, self.declared_type)
    }
}

/// Parse every field declaration in `tokens`, keeping their order.
///
/// Tokens without a `:` are skipped.
pub fn parse_fields<S: AsRef<str>>(tokens: &[S]) -> Vec<FieldSpec> {
    tokens
        .iter()
        .filter_map(|token| FieldSpec::parse(token.as_ref()))
        .collect()
}

/// The user-chosen entity identifier.
///
/// Every spelling of the entity that ends up in generated code is derived
/// here, so all occurrences agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Type name (e.g., "post" -> "Post").
    pub fn class_name(&self) -> String {
        capitalize_first(&self.0)
    }

    /// Variable name (e.g., "Post" -> "post").
    pub fn variable_name(&self) -> String {
        self.0.to_lowercase()
    }

    /// Table name (e.g., "post" -> "posts").
    pub fn table_name(&self) -> String {
        pluralize(&self.0)
    }

    /// Separator-cased name (e.g., "BlogPost" -> "blog_post").
    pub fn key(&self) -> String {
        to_separator_case(&self.0)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        let field = FieldSpec::parse("viewCount:int").unwrap();
        assert_eq!(field.name(), "viewCount");
        assert_eq!(field.declared_type(), "int");
        assert_eq!(field.type_name(), "Int");
        assert_eq!(field.column_type(), "int");
        assert_eq!(field.key(), "view_count");
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let field = FieldSpec::parse("scores:[String:Int]").unwrap();
        assert_eq!(field.name(), "scores");
        assert_eq!(field.declared_type(), "[String:Int]");
        assert_eq!(field.to_string(), "scores:[String:Int]");
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(FieldSpec::parse("post"), None);
        assert_eq!(FieldSpec::parse(""), None);
    }

    #[test]
    fn test_parse_keeps_empty_parts() {
        let field = FieldSpec::parse(":string").unwrap();
        assert_eq!(field.name(), "");
        assert_eq!(field.type_name(), "String");

        let field = FieldSpec::parse("title:").unwrap();
        assert_eq!(field.declared_type(), "");
        assert_eq!(field.type_name(), "");
    }

    #[test]
    fn test_parse_fields_keeps_order_and_skips_plain_tokens() {
        let fields = parse_fields(&["title:string", "extra", "viewCount:int", "author:User"]);
        let names: Vec<_> = fields.iter().map(FieldSpec::name).collect();
        assert_eq!(names, ["title", "viewCount", "author"]);
    }

    #[test]
    fn test_parse_fields_empty() {
        let tokens: [&str; 0] = [];
        assert!(parse_fields(&tokens).is_empty());
    }

    #[test]
    fn test_entity_name_views() {
        let entity = EntityName::new("post");
        assert_eq!(entity.class_name(), "Post");
        assert_eq!(entity.variable_name(), "post");
        assert_eq!(entity.table_name(), "posts");
        assert_eq!(entity.key(), "post");

        let entity = EntityName::new("BlogPost");
        assert_eq!(entity.class_name(), "BlogPost");
        assert_eq!(entity.variable_name(), "blogpost");
        assert_eq!(entity.table_name(), "BlogPosts");
        assert_eq!(entity.key(), "blog_post");
    }

    #[test]
    fn test_entity_table_name_is_naive() {
        assert_eq!(EntityName::new("category").table_name(), "categorys");
    }
}
