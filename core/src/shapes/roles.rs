//! # Shape Roles
//!
//! The names of structures used as operation inputs and outputs. Structure
//! classification consults these sets with both the raw and the canonical
//! name of a shape, so either spelling may be stored.

use crate::shapes::models::ShapeRef;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// The part of a service operation that names its request and response shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Operation {
    /// Request shape.
    #[serde(default)]
    pub input: Option<ShapeRef>,
    /// Response shape.
    #[serde(default)]
    pub output: Option<ShapeRef>,
}

/// Names of request and response structures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeRoles {
    inputs: IndexSet<String>,
    outputs: IndexSet<String>,
}

impl ShapeRoles {
    /// Creates roles from input and output structure names.
    pub fn new<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Collects the raw input and output shape names referenced by `operations`.
    pub fn from_operations(operations: &IndexMap<String, Operation>) -> Self {
        let mut roles = Self::default();
        for op in operations.values() {
            if let Some(input) = &op.input {
                roles.inputs.insert(input.shape.clone());
            }
            if let Some(output) = &op.output {
                roles.outputs.insert(output.shape.clone());
            }
        }
        roles
    }

    /// Whether `name` is the request shape of some operation.
    pub fn is_input(&self, name: &str) -> bool {
        self.inputs.contains(name)
    }

    /// Whether `name` is the response shape of some operation.
    pub fn is_output(&self, name: &str) -> bool {
        self.outputs.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roles_from_operations() {
        let operations: IndexMap<String, Operation> = serde_json::from_value(json!({
            "DescribeFoo": {
                "name": "DescribeFoo",
                "http": { "method": "POST", "requestUri": "/" },
                "input": { "shape": "DescribeFooRequest" },
                "output": { "shape": "DescribeFooResponse" }
            },
            "DeleteFoo": {
                "name": "DeleteFoo",
                "input": { "shape": "delete_foo_input" }
            }
        }))
        .unwrap();

        let roles = ShapeRoles::from_operations(&operations);
        assert!(roles.is_input("DescribeFooRequest"));
        assert!(roles.is_input("delete_foo_input"));
        assert!(roles.is_output("DescribeFooResponse"));
        assert!(!roles.is_output("DescribeFooRequest"));
    }
}
