//! # Resolved Types
//!
//! The output of a resolution run: descriptors in shape definition order and
//! an index from rendered type name back to its descriptor.

use crate::codec::CodecDescriptor;
use std::collections::HashMap;

/// Ordered descriptors plus a lookup by rendered `type`.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTypes {
    types: Vec<CodecDescriptor>,
    by_type: HashMap<String, usize>,
}

impl ResolvedTypes {
    /// Indexes `types`. When several descriptors render to the same type
    /// (every plain string renders as `String`), the last one is indexed.
    pub fn new(types: Vec<CodecDescriptor>) -> Self {
        let by_type = types
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.type_.clone(), idx))
            .collect();
        Self { types, by_type }
    }

    /// Descriptors in shape definition order.
    pub fn types(&self) -> &[CodecDescriptor] {
        &self.types
    }

    /// Finds the descriptor rendered as `type_name`.
    pub fn find_by_type(&self, type_name: &str) -> Option<&CodecDescriptor> {
        self.by_type.get(type_name).map(|idx| &self.types[*idx])
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no shapes were resolved.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates descriptors in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, CodecDescriptor> {
        self.types.iter()
    }

    /// Consumes the result, keeping only the ordered descriptors.
    pub fn into_vec(self) -> Vec<CodecDescriptor> {
        self.types
    }
}

impl<'a> IntoIterator for &'a ResolvedTypes {
    type Item = &'a CodecDescriptor;
    type IntoIter = std::slice::Iter<'a, CodecDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
