//! # Expression Vocabulary
//!
//! Module names and aliases the generated expressions refer to. The renderer
//! owns the templates that declare these aliases, so it may override any of
//! them; unset fields keep their defaults.

use serde::Deserialize;

/// Aliases used when assembling decoder and encoder expressions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vocabulary {
    /// Alias of the JSON decode module.
    pub json_decode: String,
    /// Alias of the JSON encode module.
    pub json_encode: String,
    /// Alias of the extra JSON decode helpers (dates, non-string dict keys).
    pub json_decode_extra: String,
    /// Root module of the runtime support library.
    pub core_module: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            json_decode: "JD".to_string(),
            json_encode: "JE".to_string(),
            json_decode_extra: "JDX".to_string(),
            core_module: "AWS.Core".to_string(),
        }
    }
}

impl Vocabulary {
    /// `<core>.Encode`, home of the query-argument builders.
    pub fn encode_module(&self) -> String {
        format!("{}.Encode", self.core_module)
    }

    /// `<core>.Decode`
    pub fn decode_module(&self) -> String {
        format!("{}.Decode", self.core_module)
    }

    /// `<core>.Enum`, the enum coercion helpers.
    pub fn enum_module(&self) -> String {
        format!("{}.Enum", self.core_module)
    }

    /// Qualifies `function` with the JSON decode alias.
    pub fn decode(&self, function: &str) -> String {
        format!("{}.{}", self.json_decode, function)
    }

    /// Qualifies `function` with the JSON encode alias.
    pub fn encode(&self, function: &str) -> String {
        format!("{}.{}", self.json_encode, function)
    }

    /// Qualifies `function` with the extra decode alias.
    pub fn decode_extra(&self, function: &str) -> String {
        format!("{}.{}", self.json_decode_extra, function)
    }

    /// Import line for the extra decode helpers.
    pub fn decode_extra_import(&self) -> String {
        format!("import Json.Decode.Extra as {}", self.json_decode_extra)
    }

    /// Import line for the enum coercion helpers.
    pub fn enum_import(&self) -> String {
        format!("import {}", self.enum_module())
    }
}
