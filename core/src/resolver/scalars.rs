//! # Scalar Rules
//!
//! Fixed codecs for shapes without children. `double` shares the `float`
//! codec and `long` shares the `integer` codec.

use crate::codec::{CodecDescriptor, QueryEncoder, Vocabulary};

/// Rendered type of a plain string; map keys must resolve to this or an enum.
pub const STRING_TYPE: &str = "String";

/// Query transform that passes a string through unchanged.
pub const IDENTITY: &str = "(\\x -> x)";

/// Rule for `boolean`.
pub fn boolean(vocab: &Vocabulary) -> CodecDescriptor {
    let to_query = format!("{}.bool", vocab.encode_module());
    CodecDescriptor::new(
        "Bool",
        vocab.decode("bool"),
        vocab.encode("bool"),
        to_query.clone(),
        QueryEncoder::one(vocab.encode_module(), to_query),
    )
}

/// Rule for `float` and `double`.
pub fn float(vocab: &Vocabulary) -> CodecDescriptor {
    CodecDescriptor::new(
        "Float",
        vocab.decode("float"),
        vocab.encode("float"),
        "toString",
        QueryEncoder::one(vocab.encode_module(), "toString"),
    )
}

/// Rule for `integer` and `long`.
pub fn integer(vocab: &Vocabulary) -> CodecDescriptor {
    CodecDescriptor::new(
        "Int",
        vocab.decode("int"),
        vocab.encode("int"),
        "toString",
        QueryEncoder::one(vocab.encode_module(), "toString"),
    )
}

/// Rule for `string` and `blob` shapes without an `enum`.
pub fn string(vocab: &Vocabulary) -> CodecDescriptor {
    CodecDescriptor::new(
        STRING_TYPE,
        vocab.decode("string"),
        vocab.encode("string"),
        IDENTITY,
        QueryEncoder::one(vocab.encode_module(), IDENTITY),
    )
}

/// Rule for `timestamp`: ISO-8601 UTC in both JSON and query form.
pub fn timestamp(vocab: &Vocabulary) -> CodecDescriptor {
    let to_iso = "Date.Extra.toUtcIsoString";
    CodecDescriptor::new(
        "Date",
        vocab.decode_extra("date"),
        format!("{} >> {}", to_iso, vocab.encode("string")),
        to_iso,
        QueryEncoder::one(vocab.encode_module(), to_iso),
    )
    .with_imports([
        "import Date exposing (Date)".to_string(),
        "import Date.Extra".to_string(),
        vocab.decode_extra_import(),
    ])
}
