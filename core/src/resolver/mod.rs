#![deny(missing_docs)]

//! # Shape Resolution
//!
//! Turns named shapes into codec descriptors.
//!
//! - **scalars**: booleans, numbers, strings, timestamps.
//! - **enums**: string shapes carrying an `enum`.
//! - **collections**: lists and maps.
//! - **structures**: classification and member resolution.
//! - **resolved**: the ordered output and its type-name index.
//!
//! Children are always reached through the registry by name. A child that is
//! a structure is resolved as a reference (everything but its members), which
//! is what lets recursive structures terminate; its full descriptor is built
//! once, by the top-level driver.

pub mod collections;
pub mod enums;
pub mod resolved;
pub mod scalars;
pub mod structures;

pub use resolved::ResolvedTypes;
pub use structures::classify;

use crate::codec::{CodecDescriptor, Vocabulary};
use crate::error::{AppError, AppResult};
use crate::shapes::{NamedShape, ShapeKind, ShapeRef, ShapeRegistry, ShapeRoles};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

/// How much of a structure to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Depth {
    /// Including members.
    Full,
    /// Type and codec expressions only; used for nested references.
    Reference,
}

/// Names of the lists and maps currently being resolved, innermost last.
pub(crate) type Stack<'a> = Vec<&'a str>;

/// Resolution context: the registry, the request/response name sets and the
/// expression vocabulary. Holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a ShapeRegistry,
    roles: &'a ShapeRoles,
    vocabulary: &'a Vocabulary,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `registry`.
    pub fn new(
        registry: &'a ShapeRegistry,
        roles: &'a ShapeRoles,
        vocabulary: &'a Vocabulary,
    ) -> Self {
        Self {
            registry,
            roles,
            vocabulary,
        }
    }

    /// The registry shapes are looked up in.
    pub(crate) fn registry(&self) -> &'a ShapeRegistry {
        self.registry
    }

    /// The request/response name sets.
    pub(crate) fn roles(&self) -> &'a ShapeRoles {
        self.roles
    }

    /// The expression vocabulary.
    pub(crate) fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Resolves every registered shape, in definition order.
    ///
    /// Stops at the first error; no partial output is returned.
    pub fn resolve_all(&self) -> AppResult<ResolvedTypes> {
        debug!(shapes = self.registry.len(), "resolving shape registry");

        let types = self
            .registry
            .iter()
            .map(|shape| self.resolve_type(shape))
            .collect::<AppResult<Vec<_>>>()?;

        debug!(types = types.len(), "resolved shape registry");
        Ok(ResolvedTypes::new(types))
    }

    /// Resolves `shape` into its full descriptor.
    ///
    /// The descriptor's `name` is always the shape's canonical name.
    pub fn resolve_type(&self, shape: &'a NamedShape) -> AppResult<CodecDescriptor> {
        let mut stack = Stack::new();
        self.resolve_at(shape, Depth::Full, &mut stack)
    }

    /// Looks up a by-name reference and resolves the shape it names, exactly
    /// as [`Resolver::resolve_type`] would.
    pub fn resolve_shape_ref(&self, reference: &ShapeRef) -> AppResult<CodecDescriptor> {
        self.resolve_type(self.registry.lookup(reference)?)
    }

    /// Looks up `reference` and resolves it at reference depth. Used for the
    /// children of lists, maps and structures.
    pub(crate) fn resolve_child(
        &self,
        reference: &ShapeRef,
        stack: &mut Stack<'a>,
    ) -> AppResult<CodecDescriptor> {
        let shape = self.registry.lookup(reference)?;
        self.resolve_at(shape, Depth::Reference, stack)
    }

    fn resolve_at(
        &self,
        shape: &'a NamedShape,
        depth: Depth,
        stack: &mut Stack<'a>,
    ) -> AppResult<CodecDescriptor> {
        let vocab = self.vocabulary;
        let mut descriptor = match &shape.shape.kind {
            ShapeKind::Boolean => scalars::boolean(vocab),
            ShapeKind::Float | ShapeKind::Double => scalars::float(vocab),
            ShapeKind::Integer | ShapeKind::Long => scalars::integer(vocab),
            // Blobs have no encoding of their own yet.
            ShapeKind::String | ShapeKind::Blob => match shape.shape.enum_literals() {
                Some(literals) => enums::resolve_enum(vocab, shape, literals),
                None => scalars::string(vocab),
            },
            ShapeKind::Timestamp => scalars::timestamp(vocab),
            ShapeKind::List => self.nested(shape, stack, |stack| {
                collections::resolve_list(self, shape, stack)
            })?,
            ShapeKind::Map => self.nested(shape, stack, |stack| {
                collections::resolve_map(self, shape, stack)
            })?,
            ShapeKind::Structure => structures::resolve_structure(self, shape, depth, stack)?,
            ShapeKind::Unrecognized(_) => {
                return Err(AppError::UnknownShapeKind {
                    description: describe(shape),
                })
            }
        };

        descriptor.name = shape.name.clone();
        trace!(shape = %shape.name, kind = %shape.shape.kind, ?depth, "resolved shape");
        Ok(descriptor)
    }

    /// Runs `f` with `shape` pushed on the stack, failing if it is already there.
    fn nested<F>(
        &self,
        shape: &'a NamedShape,
        stack: &mut Stack<'a>,
        f: F,
    ) -> AppResult<CodecDescriptor>
    where
        F: FnOnce(&mut Stack<'a>) -> AppResult<CodecDescriptor>,
    {
        if stack.contains(&shape.raw_name.as_str()) {
            return Err(AppError::CyclicShapeReference {
                name: shape.raw_name.clone(),
            });
        }
        stack.push(&shape.raw_name);
        let result = f(stack);
        stack.pop();
        result
    }
}

/// Serialized description of a shape for diagnostics.
fn describe(shape: &NamedShape) -> String {
    match serde_json::to_value(&shape.shape) {
        Ok(JsonValue::Object(mut fields)) => {
            fields.insert("name".to_string(), JsonValue::String(shape.name.clone()));
            JsonValue::Object(fields).to_string()
        }
        _ => format!("{:?}", shape),
    }
}

/// Error for a shape missing a field its kind requires.
pub(crate) fn malformed(shape: &NamedShape, field: &'static str) -> AppError {
    AppError::MalformedShape {
        shape: shape.name.clone(),
        field,
    }
}
