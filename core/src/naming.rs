#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Pure string transforms used to derive type names, field names and enum
//! variants that are legal identifiers in the generated bindings.

use heck::ToUpperCamelCase;
use std::collections::HashSet;

/// Words the generated language reserves; identifiers equal to one of these
/// receive a trailing underscore.
const RESERVED_WORDS: &[&str] = &[
    "if",
    "then",
    "else",
    "case",
    "of",
    "let",
    "in",
    "type",
    "module",
    "where",
    "import",
    "exposing",
    "as",
    "port",
    "alias",
    "infix",
    "effect",
    "command",
    "subscription",
];

/// Converts a shape or field name to UpperCamelCase.
///
/// Words are split on anything that is not alphanumeric. A word that already
/// carries capitals keeps them, so `DBInstance` stays `DBInstance`.
///
/// e.g. `describe_foo` -> `DescribeFoo`
pub fn up_cam(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            if word.chars().any(char::is_uppercase) {
                capitalize(word)
            } else {
                word.to_upper_camel_case()
            }
        })
        .collect()
}

/// Converts a shape or field name to lowerCamelCase by lowering the first
/// character of its UpperCamelCase form.
///
/// e.g. `DescribeFoo` -> `describeFoo`, `DBInstance` -> `dBInstance`
pub fn low_cam(s: &str) -> String {
    let upper = up_cam(s);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonical type name for a raw shape key: UpperCamelCase, made safe, and
/// always starting with an ASCII capital.
///
/// e.g. `2xlarge` -> `V2xlarge`
pub fn type_name(raw: &str) -> String {
    let mut name = safe_identifier(&up_cam(raw));
    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        name.insert(0, 'V');
    }
    name
}

/// Makes `s` usable as an identifier in generated code.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `V`
/// prefix and reserved words get a trailing `_`.
pub fn safe_identifier(s: &str) -> String {
    let mut ident: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() {
        return "_".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, 'V');
    }
    if RESERVED_WORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Hands out identifiers that are unique within one scope (the fields of a
/// structure, the variants of an enum).
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `ident`, or `ident` with the smallest numeric suffix (from 2)
    /// that is still free.
    pub fn claim(&mut self, ident: String) -> String {
        let mut candidate = ident.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}{}", ident, n);
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
