//! Key path resolution

use super::{Field, FieldValue, Fields, KeyPath};
use crate::error::{FuzzyError, FuzzyResult};

/// Resolves a key path on an item to a scalar value.
///
/// Fails with [`FuzzyError::InvalidKey`] when the path is missing or ends on
/// something that is not a scalar.
pub trait FieldResolver<T: ?Sized>: Send + Sync {
    fn resolve(&self, item: &T, path: &KeyPath) -> FuzzyResult<FieldValue>;
}

impl<T: ?Sized, F> FieldResolver<T> for F
where
    F: Fn(&T, &KeyPath) -> FuzzyResult<FieldValue> + Send + Sync,
{
    fn resolve(&self, item: &T, path: &KeyPath) -> FuzzyResult<FieldValue> {
        self(item, path)
    }
}

/// Walks [`Fields`] one segment at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralResolver;

impl StructuralResolver {
    /// Borrowed field at `path`, without converting the leaf
    pub fn walk<'a>(item: &'a dyn Fields, path: &KeyPath) -> Option<Field<'a>> {
        let mut current = Field::Record(item);
        for segment in path.segments() {
            current = match current {
                Field::Record(record) => record.field(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl<T: Fields> FieldResolver<T> for StructuralResolver {
    fn resolve(&self, item: &T, path: &KeyPath) -> FuzzyResult<FieldValue> {
        Self::walk(item, path)
            .and_then(|field| field.to_value())
            .ok_or_else(|| FuzzyError::invalid_key(path))
    }
}
