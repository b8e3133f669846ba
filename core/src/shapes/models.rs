//! # Shape Models
//!
//! Input representation of service-definition shapes. Shapes reference each
//! other by name only, so a cyclic schema is just a set of names pointing at
//! each other.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The kind of a shape, read from its `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeKind {
    /// `boolean`
    Boolean,
    /// `float`
    Float,
    /// `double`, resolved exactly like `float`.
    Double,
    /// `integer`
    Integer,
    /// `long`, resolved exactly like `integer`.
    Long,
    /// `string`, or an enum when the shape carries `enum`.
    String,
    /// `blob`, resolved exactly like `string`.
    Blob,
    /// `timestamp`
    Timestamp,
    /// `list`
    List,
    /// `map`
    Map,
    /// `structure`
    Structure,
    /// Any kind string without a resolution rule.
    Unrecognized(String),
}

impl ShapeKind {
    /// The kind as spelled in the service definition.
    pub fn as_str(&self) -> &str {
        match self {
            ShapeKind::Boolean => "boolean",
            ShapeKind::Float => "float",
            ShapeKind::Double => "double",
            ShapeKind::Integer => "integer",
            ShapeKind::Long => "long",
            ShapeKind::String => "string",
            ShapeKind::Blob => "blob",
            ShapeKind::Timestamp => "timestamp",
            ShapeKind::List => "list",
            ShapeKind::Map => "map",
            ShapeKind::Structure => "structure",
            ShapeKind::Unrecognized(other) => other,
        }
    }
}

impl From<String> for ShapeKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "boolean" => ShapeKind::Boolean,
            "float" => ShapeKind::Float,
            "double" => ShapeKind::Double,
            "integer" => ShapeKind::Integer,
            "long" => ShapeKind::Long,
            "string" => ShapeKind::String,
            "blob" => ShapeKind::Blob,
            "timestamp" => ShapeKind::Timestamp,
            "list" => ShapeKind::List,
            "map" => ShapeKind::Map,
            "structure" => ShapeKind::Structure,
            _ => ShapeKind::Unrecognized(raw),
        }
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A by-name reference to another shape, e.g. `{"shape": "Tier"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRef {
    /// Raw key of the referenced shape.
    pub shape: String,
}

impl ShapeRef {
    /// Creates a reference to the shape registered under `shape`.
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

/// A single node of the shape graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// The shape kind.
    #[serde(rename = "type", alias = "kind")]
    pub kind: ShapeKind,
    /// Element shape (lists).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<ShapeRef>,
    /// Key shape (maps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ShapeRef>,
    /// Value shape (maps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ShapeRef>,
    /// Fields in schema order (structures).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, ShapeRef>,
    /// Mandatory field names (structures).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Allowed literals (strings).
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Repeat the query key per element instead of indexing (lists).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flattened: bool,
    /// Marks an error structure.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exception: bool,
    /// Free-text documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Shape {
    /// Creates a shape of `kind` with every optional field empty.
    pub fn of_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            member: None,
            key: None,
            value: None,
            members: IndexMap::new(),
            required: Vec::new(),
            enum_values: None,
            flattened: false,
            exception: false,
            documentation: None,
        }
    }

    /// Returns the enum literals if the shape is a non-empty enum.
    pub fn enum_literals(&self) -> Option<&[String]> {
        self.enum_values
            .as_deref()
            .filter(|values| !values.is_empty())
    }

    /// Whether `field` is listed in `required`.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }
}
