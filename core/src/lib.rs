#![deny(missing_docs)]

//! # Shapegen Core
//!
//! Resolves the shapes of a service definition into codec descriptors: for
//! every shape, the type it renders as and the expressions that decode it
//! from JSON, encode it to JSON and encode it into query-string form.
//!
//! ```no_run
//! use indexmap::IndexMap;
//! use shapegen_core::{resolve_types, Shape, ShapeRoles, Vocabulary};
//! # fn main() -> shapegen_core::AppResult<()> {
//! let shapes: IndexMap<String, Shape> = serde_json::from_value(serde_json::json!({
//!     "Active": { "type": "boolean" }
//! }))?;
//! let resolved = resolve_types(shapes, &ShapeRoles::default(), &Vocabulary::default())?;
//! assert_eq!(resolved.types()[0].type_, "Bool");
//! # Ok(())
//! # }
//! ```

/// Shared error types.
pub mod error;

/// Identifier casing and sanitizing.
pub mod naming;

/// Input shape model, registry and request/response roles.
pub mod shapes;

/// Output descriptor model and expression vocabulary.
pub mod codec;

/// Per-kind resolution rules and the dispatcher.
pub mod resolver;

use indexmap::IndexMap;

pub use codec::{Category, CodecDescriptor, Member, QueryEncoder, QueryStrategy, Vocabulary};
pub use error::{AppError, AppResult};
pub use resolver::{classify, ResolvedTypes, Resolver};
pub use shapes::{NamedShape, Operation, Shape, ShapeKind, ShapeRef, ShapeRegistry, ShapeRoles};

/// Names every shape in `shapes` and resolves each one, in definition order.
///
/// Fails on the first unknown kind, unknown reference or unsupported map key;
/// nothing is returned in that case.
pub fn resolve_types(
    shapes: IndexMap<String, Shape>,
    roles: &ShapeRoles,
    vocabulary: &Vocabulary,
) -> AppResult<ResolvedTypes> {
    let registry = ShapeRegistry::new(shapes);
    Resolver::new(&registry, roles, vocabulary).resolve_all()
}
