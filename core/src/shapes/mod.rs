#![deny(missing_docs)]

//! # Shape Model
//!
//! - **models**: `Shape`, `ShapeKind` and `ShapeRef` as read from a service definition.
//! - **registry**: canonical naming and by-name lookup.
//! - **roles**: the request / response name sets used to classify structures.

pub mod models;
pub mod registry;
pub mod roles;

pub use models::{Shape, ShapeKind, ShapeRef};
pub use registry::{NamedShape, ShapeRegistry};
pub use roles::{Operation, ShapeRoles};
