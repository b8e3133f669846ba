//! # Enum Rule
//!
//! String shapes with an `enum` become closed sum types, coerced to and from
//! their literals by the runtime's enum helpers.

use crate::codec::{Category, CodecDescriptor, QueryEncoder, Vocabulary};
use crate::naming::{low_cam, safe_identifier, UniqueNames};
use crate::shapes::NamedShape;

/// `<core>.Enum.toString >> Result.withDefault ""`
pub(crate) fn enum_to_string(vocab: &Vocabulary) -> String {
    format!("{}.toString >> Result.withDefault \"\"", vocab.enum_module())
}

/// `<core>.Enum.toFloat >> Result.withDefault 0.0`
pub(crate) fn enum_to_float(vocab: &Vocabulary) -> String {
    format!("{}.toFloat >> Result.withDefault 0.0", vocab.enum_module())
}

/// Resolves a string shape whose `enum` is `literals` (non-empty).
pub fn resolve_enum(vocab: &Vocabulary, shape: &NamedShape, literals: &[String]) -> CodecDescriptor {
    let to_string = enum_to_string(vocab);
    let mut variants = UniqueNames::new();

    let mut descriptor = CodecDescriptor::new(
        shape.name.clone(),
        format!("{}Decoder", low_cam(&shape.name)),
        format!("{} >> {}", to_string, vocab.encode("string")),
        to_string.clone(),
        QueryEncoder::one(vocab.encode_module(), to_string),
    )
    .with_imports([vocab.enum_import()])
    .with_category(Category::Union)
    .with_doc(Some(enum_doc(shape.shape.documentation.as_deref(), literals)));

    descriptor.enum_variants = Some(
        literals
            .iter()
            .map(|literal| variants.claim(safe_identifier(literal)))
            .collect(),
    );
    descriptor
}

/// Lists the accepted literals after the schema's own documentation.
fn enum_doc(documentation: Option<&str>, literals: &[String]) -> String {
    let values = literals
        .iter()
        .map(|l| format!("`{}`", l))
        .collect::<Vec<_>>()
        .join(", ");
    match documentation {
        Some(doc) if !doc.trim().is_empty() => format!("{}\n\nOne of {}.", doc.trim(), values),
        _ => format!("One of {}.", values),
    }
}
