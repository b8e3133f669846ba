//! # Structure Rule
//!
//! Classifies a structure (exception, response, request or record) and
//! resolves its members in schema order.

use crate::codec::{Category, CodecDescriptor, Member, QueryEncoder};
use crate::error::AppResult;
use crate::naming::{low_cam, safe_identifier, up_cam, UniqueNames};
use crate::resolver::{Depth, Resolver, Stack};
use crate::shapes::{NamedShape, ShapeRoles};

const RESPONSE_SUFFIX: &str = "Response";

/// Classifies a structure by first match: exception flag, output set, input set.
///
/// The role sets are matched against both the canonical and the raw name.
pub fn classify(shape: &NamedShape, roles: &ShapeRoles) -> Category {
    if shape.shape.exception {
        Category::Exception
    } else if roles.is_output(&shape.name) || roles.is_output(&shape.raw_name) {
        Category::Response
    } else if roles.is_input(&shape.name) || roles.is_input(&shape.raw_name) {
        Category::Request
    } else {
        Category::Record
    }
}

/// Resolves a `structure` shape. Members are only resolved at full depth.
pub(crate) fn resolve_structure<'a>(
    ctx: &Resolver<'a>,
    shape: &'a NamedShape,
    depth: Depth,
    stack: &mut Stack<'a>,
) -> AppResult<CodecDescriptor> {
    let vocab = ctx.vocabulary();
    let low = low_cam(&shape.name);
    let encoder = format!("{}Encoder", low);
    let category = classify(shape, ctx.roles());

    let doc = match category {
        Category::Response => Some(format!(
            "Type of HTTP response from {}",
            low.strip_suffix(RESPONSE_SUFFIX).unwrap_or(&low)
        )),
        _ => shape.shape.documentation.clone(),
    };

    let mut descriptor = CodecDescriptor::new(
        shape.name.clone(),
        format!("{}Decoder", low),
        encoder.clone(),
        encoder.clone(),
        QueryEncoder::record(vocab.encode_module(), encoder),
    )
    .with_category(category)
    .with_doc(doc);

    if depth == Depth::Full {
        descriptor.members = Some(resolve_members(ctx, shape, stack)?);
    }
    Ok(descriptor)
}

fn resolve_members<'a>(
    ctx: &Resolver<'a>,
    shape: &'a NamedShape,
    stack: &mut Stack<'a>,
) -> AppResult<Vec<Member>> {
    let mut keys = UniqueNames::new();
    let mut members = Vec::with_capacity(shape.shape.members.len());

    for (raw_key, reference) in &shape.shape.members {
        members.push(Member {
            required: shape.shape.is_required(raw_key),
            key: keys.claim(safe_identifier(&low_cam(raw_key))),
            raw_key: raw_key.clone(),
            decode_keys: decode_keys(raw_key),
            value: ctx.resolve_child(reference, stack)?,
        });
    }
    Ok(members)
}

/// Key spellings accepted when decoding: the raw key, then its lower and
/// upper camel forms, without duplicates.
pub(crate) fn decode_keys(raw_key: &str) -> Vec<String> {
    let mut keys = vec![raw_key.to_string()];
    for candidate in [low_cam(raw_key), up_cam(raw_key)] {
        if !keys.contains(&candidate) {
            keys.push(candidate);
        }
    }
    keys
}
