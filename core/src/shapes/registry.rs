#![deny(missing_docs)]

//! # Shape Registry
//!
//! Stores every shape of a service definition under its raw key and assigns
//! each one its canonical type name. Names are fixed here, before any codec
//! resolution starts, so recursive lookups never re-derive them.

use crate::error::{AppError, AppResult};
use crate::naming::{type_name, UniqueNames};
use crate::shapes::models::{Shape, ShapeRef};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// A shape paired with its canonical type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedShape {
    /// Key the shape was registered under in the service definition.
    pub raw_name: String,
    /// Canonical type name: UpperCamelCase, a legal identifier, and unique
    /// within the registry.
    pub name: String,
    /// The shape itself.
    pub shape: Shape,
}

/// Registry of named shapes, iterated in definition order.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: IndexMap<String, NamedShape>,
}

impl ShapeRegistry {
    /// Builds the registry, naming each shape by upper-camel-casing its key.
    ///
    /// Keys that case to a name already taken get a numeric suffix, in
    /// definition order (`foo_bar` -> `FooBar`, then `FooBar` -> `FooBar2`).
    pub fn new(shapes: IndexMap<String, Shape>) -> Self {
        let mut names = UniqueNames::new();
        let mut named = IndexMap::with_capacity(shapes.len());

        for (raw_name, shape) in shapes {
            let name = names.claim(type_name(&raw_name));
            named.insert(
                raw_name.clone(),
                NamedShape {
                    raw_name,
                    name,
                    shape,
                },
            );
        }

        Self { shapes: named }
    }

    /// Builds the registry from the `shapes` object of an already-loaded
    /// service definition.
    pub fn from_json(shapes: JsonValue) -> AppResult<Self> {
        let shapes: IndexMap<String, Shape> = serde_json::from_value(shapes)?;
        Ok(Self::new(shapes))
    }

    /// Returns the shape registered under `raw_name`.
    pub fn get(&self, raw_name: &str) -> Option<&NamedShape> {
        self.shapes.get(raw_name)
    }

    /// Looks up the target of a by-name reference.
    pub fn lookup(&self, reference: &ShapeRef) -> AppResult<&NamedShape> {
        self.get(&reference.shape)
            .ok_or_else(|| AppError::UnknownShapeReference {
                name: reference.shape.clone(),
            })
    }

    /// Iterates shapes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedShape> {
        self.shapes.values()
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::models::ShapeKind;
    use serde_json::json;

    #[test]
    fn test_registry_assigns_canonical_names() {
        let registry = ShapeRegistry::from_json(json!({
            "describe_foo": { "type": "structure", "members": {} },
            "Tier": { "type": "string", "enum": ["Gold"] }
        }))
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("describe_foo").unwrap().name, "DescribeFoo");
        assert_eq!(registry.get("Tier").unwrap().name, "Tier");

        let order: Vec<&str> = registry.iter().map(|s| s.raw_name.as_str()).collect();
        assert_eq!(order, vec!["describe_foo", "Tier"]);
    }

    #[test]
    fn test_lookup_unknown_reference() {
        let registry = ShapeRegistry::default();
        let err = registry.lookup(&ShapeRef::new("Nope")).unwrap_err();
        assert!(matches!(err, AppError::UnknownShapeReference { name } if name == "Nope"));
    }

    #[test]
    fn test_colliding_names_get_suffixes() {
        let mut shapes = IndexMap::new();
        shapes.insert("foo_bar".to_string(), Shape::of_kind(ShapeKind::String));
        shapes.insert("FooBar".to_string(), Shape::of_kind(ShapeKind::String));

        let registry = ShapeRegistry::new(shapes);
        assert_eq!(registry.get("foo_bar").unwrap().name, "FooBar");
        assert_eq!(registry.get("FooBar").unwrap().name, "FooBar2");
    }

    #[test]
    fn test_names_are_safe_identifiers() {
        let registry = ShapeRegistry::from_json(json!({
            "2xlarge": { "type": "string" },
            "DBInstance": { "type": "structure", "members": {} },
            "t2.micro": { "type": "string" }
        }))
        .unwrap();

        assert_eq!(registry.get("2xlarge").unwrap().name, "V2xlarge");
        assert_eq!(registry.get("DBInstance").unwrap().name, "DBInstance");
        assert_eq!(registry.get("t2.micro").unwrap().name, "T2Micro");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = ShapeRegistry::from_json(json!(["not", "a", "map"])).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
