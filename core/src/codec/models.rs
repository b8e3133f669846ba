//! # Descriptor Models
//!
//! What the resolver knows about one shape: its rendered type and the JSON
//! and query-string expressions that read and write it.

use crate::codec::query::QueryEncoder;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt::{self, Display};

/// Rendering hint for enums and structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A closed sum type (string enum).
    Union,
    /// An operation's request structure.
    Request,
    /// An operation's response structure.
    Response,
    /// An error structure.
    Exception,
    /// Any other structure.
    Record,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Union => "union",
            Category::Request => "request",
            Category::Response => "response",
            Category::Exception => "exception",
            Category::Record => "record",
        };
        f.write_str(s)
    }
}

/// A field of a structure descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Whether the field is listed in the structure's `required`.
    pub required: bool,
    /// Safe lowerCamelCase field identifier.
    pub key: String,
    /// Field name as written in the schema.
    pub raw_key: String,
    /// Key spellings accepted when decoding; always starts with `raw_key`.
    pub decode_keys: Vec<String>,
    /// Descriptor of the field's shape.
    pub value: CodecDescriptor,
}

/// Resolved representation of one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecDescriptor {
    /// Canonical name of the shape this was resolved from.
    pub name: String,
    /// Target type name or type expression.
    #[serde(rename = "type")]
    pub type_: String,
    /// Expression decoding a JSON value into `type_`.
    pub decoder: String,
    /// Expression encoding a `type_` value to JSON.
    pub json_encoder: String,
    /// Expression stringifying a scalar of this type for query encoding.
    pub query_encoder_type: String,
    /// Query-string encoder, parameterized by the base parameter name.
    pub query_encoder: QueryEncoder,
    /// Imports the rendered code needs for the expressions above.
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub extra_imports: IndexSet<String>,
    /// Rendering hint (enums and structures only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Safe variant identifiers (enums only).
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_variants: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Fields in schema order. `None` for non-structures and for structure
    /// references embedded in another descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

impl CodecDescriptor {
    /// Creates a descriptor with no imports, category, variants, doc or members.
    ///
    /// `name` is left empty; the dispatcher fills it in.
    pub fn new(
        type_: impl Into<String>,
        decoder: impl Into<String>,
        json_encoder: impl Into<String>,
        query_encoder_type: impl Into<String>,
        query_encoder: QueryEncoder,
    ) -> Self {
        Self {
            name: String::new(),
            type_: type_.into(),
            decoder: decoder.into(),
            json_encoder: json_encoder.into(),
            query_encoder_type: query_encoder_type.into(),
            query_encoder,
            extra_imports: IndexSet::new(),
            category: None,
            enum_variants: None,
            doc: None,
            members: None,
        }
    }

    /// Adds import lines.
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_imports
            .extend(imports.into_iter().map(Into::into));
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the documentation text.
    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Whether this describes an enum.
    pub fn is_enum(&self) -> bool {
        self.enum_variants.is_some()
    }

    /// Renders the query-string encoding expression for parameter `base`.
    pub fn render_query_encoder(&self, base: &str) -> String {
        self.query_encoder.render(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_uses_renderer_field_names() {
        let descriptor = CodecDescriptor::new(
            "Bool",
            "JD.bool",
            "JE.bool",
            "AWS.Core.Encode.bool",
            QueryEncoder::one("AWS.Core.Encode", "AWS.Core.Encode.bool"),
        );
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value["type"], json!("Bool"));
        assert_eq!(value["jsonEncoder"], json!("JE.bool"));
        assert_eq!(value["queryEncoderType"], json!("AWS.Core.Encode.bool"));
        assert!(value.get("category").is_none());
        assert!(value.get("extraImports").is_none());
    }

    #[test]
    fn test_imports_are_deduplicated_in_order() {
        let descriptor = CodecDescriptor::new(
            "Date",
            "JDX.date",
            "",
            "",
            QueryEncoder::one("E", "t"),
        )
        .with_imports(["import Date.Extra", "import Date exposing (Date)"])
        .with_imports(["import Date.Extra"]);

        let imports: Vec<&str> = descriptor.extra_imports.iter().map(String::as_str).collect();
        assert_eq!(imports, vec!["import Date.Extra", "import Date exposing (Date)"]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Union.to_string(), "union");
        assert_eq!(Category::Exception.to_string(), "exception");
    }
}
