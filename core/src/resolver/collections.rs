//! # Collection Rules
//!
//! Lists and maps. Children are resolved first and their expressions are
//! embedded in the collection's own.

use crate::codec::{CodecDescriptor, QueryEncoder};
use crate::error::{AppError, AppResult};
use crate::resolver::enums::enum_to_float;
use crate::resolver::{malformed, Resolver, Stack};
use crate::shapes::{NamedShape, ShapeKind};
use regex::Regex;
use std::sync::OnceLock;

/// Resolves a `list` shape.
pub(crate) fn resolve_list<'a>(
    ctx: &Resolver<'a>,
    shape: &'a NamedShape,
    stack: &mut Stack<'a>,
) -> AppResult<CodecDescriptor> {
    let vocab = ctx.vocabulary();
    let member = shape
        .shape
        .member
        .as_ref()
        .ok_or_else(|| malformed(shape, "member"))?;
    let child = ctx.resolve_child(member, stack)?;

    Ok(CodecDescriptor::new(
        format!("(List {})", child.type_),
        format!("({} {})", vocab.decode("list"), child.decoder),
        format!("(List.map ({})) >> {}", child.json_encoder, vocab.encode("list")),
        child.query_encoder_type,
        QueryEncoder::list(
            vocab.encode_module(),
            shape.shape.flattened,
            child.query_encoder,
        ),
    ))
}

/// Resolves a `map` shape.
///
/// Keys must be plain strings or enums. Enums whose literals are all
/// decimal numbers (`1.0`, `2.5`) key a float dictionary.
pub(crate) fn resolve_map<'a>(
    ctx: &Resolver<'a>,
    shape: &'a NamedShape,
    stack: &mut Stack<'a>,
) -> AppResult<CodecDescriptor> {
    let vocab = ctx.vocabulary();
    let key_ref = shape.shape.key.as_ref().ok_or_else(|| malformed(shape, "key"))?;
    let value_ref = shape
        .shape
        .value
        .as_ref()
        .ok_or_else(|| malformed(shape, "value"))?;

    let key_shape = ctx.registry().lookup(key_ref)?;
    let key = ctx.resolve_child(key_ref, stack)?;
    if !matches!(key_shape.shape.kind, ShapeKind::String | ShapeKind::Blob) {
        return Err(AppError::UnsupportedMapKeyType {
            shape: shape.name.clone(),
            key_type: key.type_,
        });
    }
    let key_literals = key_shape.shape.enum_literals();
    let value = ctx.resolve_child(value_ref, stack)?;

    let descriptor = match key_literals {
        Some(literals) if is_enum_of_floats(literals) => {
            let key_transform = enum_to_float(vocab);
            let to_query = format!("{} >> toString", key_transform);
            CodecDescriptor::new(
                format!("(Dict Float {})", value.type_),
                format!(
                    "({} {} {})",
                    vocab.decode_extra("dict2"),
                    vocab.decode("float"),
                    value.decoder
                ),
                format!("{} >> {}", key_transform, vocab.encode("float")),
                to_query.clone(),
                QueryEncoder::one(vocab.encode_module(), to_query),
            )
            .with_imports([
                vocab.enum_import(),
                "import Dict exposing (Dict)".to_string(),
                vocab.decode_extra_import(),
            ])
        }
        _ => {
            // Enum keys coerce through the enum helpers, plain keys pass through.
            let key_transform = key.query_encoder_type.clone();
            let mut imports = Vec::new();
            if key.is_enum() {
                imports.push(vocab.enum_import());
            }
            imports.push("import Dict exposing (Dict)".to_string());

            CodecDescriptor::new(
                format!("(Dict String {})", value.type_),
                format!("({}.dict {})", vocab.decode_module(), value.decoder),
                format!("{} >> {}", key_transform, vocab.encode("string")),
                key_transform.clone(),
                QueryEncoder::one(vocab.encode_module(), key_transform),
            )
            .with_imports(imports)
        }
    };
    Ok(descriptor)
}

/// Whether every literal is a decimal number with a fractional part.
pub(crate) fn is_enum_of_floats(literals: &[String]) -> bool {
    static FLOAT_RE: OnceLock<Regex> = OnceLock::new();
    let float_re = FLOAT_RE.get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("Invalid regex"));
    !literals.is_empty() && literals.iter().all(|l| float_re.is_match(l))
}
