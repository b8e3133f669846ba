//! # Error Handling
//!
//! Provides the unified `AppError` enum returned by every resolution step.
//! All variants are fatal: a run either produces the full descriptor set or
//! stops at the first error.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate. Only `serde_json::Error` converts
/// implicitly; every schema defect is constructed explicitly with its context.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A shape declares a kind that has no resolution rule.
    #[display("Could not find type resolver for {description}")]
    UnknownShapeKind {
        /// Serialized JSON description of the offending shape.
        description: String,
    },

    /// A member or child refers to a shape name absent from the registry.
    #[display("Unknown shape reference '{name}'")]
    UnknownShapeReference {
        /// The raw shape name that could not be found.
        name: String,
    },

    /// A map key resolved to something other than a string or an enum.
    #[display("Unexpected map key type {key_type} in shape '{shape}', don't know how to decode")]
    UnsupportedMapKeyType {
        /// Canonical name of the map shape.
        shape: String,
        /// The rendered type the key resolved to.
        key_type: String,
    },

    /// A list or map contains itself without an intervening structure.
    #[display("Shape '{name}' refers to itself through lists or maps only")]
    CyclicShapeReference {
        /// Raw name of the shape that closed the cycle.
        name: String,
    },

    /// A shape lacks a field its kind requires (e.g. a list without `member`).
    #[display("Shape '{shape}' is missing required field '{field}'")]
    MalformedShape {
        /// Canonical name of the malformed shape.
        shape: String,
        /// The missing schema field.
        field: &'static str,
    },

    /// The shape document could not be read into the shape model.
    #[from]
    #[display("Invalid shape document: {_0}")]
    Json(serde_json::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
