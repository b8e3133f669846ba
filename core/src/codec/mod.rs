#![deny(missing_docs)]

//! # Codec Descriptors
//!
//! - **models**: `CodecDescriptor`, `Member` and `Category`, the output handed to the renderer.
//! - **query**: `QueryEncoder`, the deferred query-string encoding expression.
//! - **vocabulary**: renderer-supplied module aliases the expressions are built from.

pub mod models;
pub mod query;
pub mod vocabulary;

pub use models::{Category, CodecDescriptor, Member};
pub use query::{QueryEncoder, QueryStrategy};
pub use vocabulary::Vocabulary;
