//! # Query Encoders
//!
//! A query encoder is a function of the query-parameter base name. It is kept
//! as data so descriptors stay comparable and serializable, and is turned into
//! an expression with [`QueryEncoder::render`].

use serde::Serialize;

/// Deferred query-string encoding expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEncoder {
    /// Module providing the `add*ToQueryArgs` builders.
    pub encode_module: String,
    /// How values are added to the query arguments.
    pub strategy: QueryStrategy,
}

/// How a value is added to the query arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QueryStrategy {
    /// A single value, stringified by `transform`.
    One {
        /// Stringification expression.
        transform: String,
    },
    /// Each element encoded by `element`, under repeated (`flattened`) or indexed keys.
    List {
        /// Repeat the base key per element instead of indexing it.
        flattened: bool,
        /// Encoder of a single element.
        element: Box<QueryEncoder>,
    },
    /// A record flattened through its own encoder.
    Record {
        /// Name of the record encoder.
        encoder: String,
    },
}

impl QueryEncoder {
    /// Encodes one scalar value stringified by `transform`.
    pub fn one(encode_module: impl Into<String>, transform: impl Into<String>) -> Self {
        Self {
            encode_module: encode_module.into(),
            strategy: QueryStrategy::One {
                transform: transform.into(),
            },
        }
    }

    /// Encodes each element of a list with `element`.
    pub fn list(encode_module: impl Into<String>, flattened: bool, element: QueryEncoder) -> Self {
        Self {
            encode_module: encode_module.into(),
            strategy: QueryStrategy::List {
                flattened,
                element: Box::new(element),
            },
        }
    }

    /// Encodes a record through `encoder`.
    pub fn record(encode_module: impl Into<String>, encoder: impl Into<String>) -> Self {
        Self {
            encode_module: encode_module.into(),
            strategy: QueryStrategy::Record {
                encoder: encoder.into(),
            },
        }
    }

    /// Renders the full encoding expression for parameter `base`.
    ///
    /// List elements are rendered with an empty base; the list builder
    /// supplies their keys.
    pub fn render(&self, base: &str) -> String {
        let module = &self.encode_module;
        match &self.strategy {
            QueryStrategy::One { transform } => format!(
                "{}.addOneToQueryArgs {} \"{}\"",
                module,
                parenthesize(transform),
                base
            ),
            QueryStrategy::List { flattened, element } => format!(
                "{}.addListToQueryArgs {} ({}) \"{}\"",
                module,
                if *flattened { "True" } else { "False" },
                element.render(""),
                base
            ),
            QueryStrategy::Record { encoder } => {
                format!("{}.addRecordToQueryArgs {} \"{}\"", module, encoder, base)
            }
        }
    }
}

/// Wraps a composed expression in parentheses so it can be passed as an argument.
fn parenthesize(expr: &str) -> String {
    let already_wrapped = expr.starts_with('(') && expr.ends_with(')');
    if already_wrapped || !expr.contains(char::is_whitespace) {
        expr.to_string()
    } else {
        format!("({})", expr)
    }
}
