//! Per-field code fragments of a model.
//!
//! Every fragment is built in the same pass over the fields, so the Nth
//! line (or list entry) of each fragment always describes the Nth field.

use crate::{
    builder::{FragmentBuilder, Indent},
    field::{EntityName, FieldSpec},
};

/// All per-field fragments of one model, trimmed and ready for substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    /// `var title: String`
    pub declarations: String,
    /// `$0.string("title")`
    pub column_definitions: String,
    /// `static let title = "title"`
    pub key_constants: String,
    /// `try json.set(Post.Keys.title, title)`
    pub structured_encode: String,
    /// `title: try json.get(Post.Keys.title)`, comma separated
    pub structured_decode: String,
    /// `title = try row.get(Post.Keys.title)`
    pub row_decode: String,
    /// `try row.set(Post.Keys.title, title)`
    pub row_encode: String,
    /// `title:String`, comma separated
    pub constructor_params: String,
    /// `self.title = title`
    pub constructor_body: String,
}

impl FragmentSet {
    /// Build every fragment with the default indentation.
    pub fn synthesize(entity: &EntityName, fields: &[FieldSpec]) -> Self {
        Self::synthesize_with(Indent::default(), entity, fields)
    }

    /// Build every fragment with the given indentation.
    pub fn synthesize_with(indent: Indent, entity: &EntityName, fields: &[FieldSpec]) -> Self {
        let lines = |level: usize| FragmentBuilder::new(indent).level(level);
        let class_name = entity.class_name();

        let mut declarations = lines(1);
        let mut column_definitions = lines(3);
        let mut key_constants = lines(2);
        let mut structured_encode = lines(2);
        let mut structured_decode = lines(3).separated(",\n");
        let mut row_decode = lines(2);
        let mut row_encode = lines(2);
        let mut constructor_params = lines(0).separated(", ");
        let mut constructor_body = lines(2);

        let mut first = true;
        for field in fields {
            let name = field.name();
            let type_name = field.type_name();
            let key = field.key();
            let key_path = format!("{}.Keys.{}", class_name, name);

            declarations.push(first, &format!("var {}: {}", name, type_name));
            column_definitions.push(first, &format!("$0.{}(\"{}\")", field.column_type(), key));
            key_constants.push(first, &format!("static let {} = \"{}\"", name, key));
            structured_encode.push(first, &format!("try json.set({}, {})", key_path, name));
            structured_decode.push(first, &format!("{}: try json.get({})", name, key_path));
            row_decode.push(first, &format!("{} = try row.get({})", name, key_path));
            row_encode.push(first, &format!("try row.set({}, {})", key_path, name));
            constructor_params.push(first, &format!("{}:{}", name, type_name));
            constructor_body.push(first, &format!("self.{} = {}", name, name));

            first = false;
        }

        Self {
            declarations: declarations.build(),
            column_definitions: column_definitions.build(),
            key_constants: key_constants.build(),
            structured_encode: structured_encode.build(),
            structured_decode: structured_decode.build(),
            row_decode: row_decode.build(),
            row_encode: row_encode.build(),
            constructor_params: constructor_params.build(),
            constructor_body: constructor_body.build(),
        }
    }
}
