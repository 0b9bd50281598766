//! Association classification
//!
//! Splits an entity's fields into plain attributes and association evidence
//! by matching resolved field types against the names of known entities.

use std::collections::BTreeSet;

use super::model::{Entity, Field};
use super::resolver::resolve;

/// Outcome of classifying one entity's fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification<'f> {
    /// Matched entity names, one per association field, duplicates kept
    pub associations: Vec<String>,
    /// Fields whose resolved type names a known entity
    pub association_fields: Vec<&'f Field>,
    /// Fields rendered as attributes
    pub attributes: Vec<&'f Field>,
}

impl Classification<'_> {
    pub fn has_associations(&self) -> bool {
        !self.associations.is_empty()
    }
}

/// Names of all entities in a rendering pass
pub fn known_entity_names(entities: &[Entity]) -> BTreeSet<&str> {
    entities.iter().map(|e| e.name.as_str()).collect()
}

/// Partition fields into associations and attributes
///
/// Matching is exact and case-sensitive.
pub fn classify<'f>(fields: &'f [Field], known: &BTreeSet<&str>) -> Classification<'f> {
    let mut classification = Classification::default();
    for field in fields {
        let resolved = resolve(&field.type_name);
        if known.contains(resolved.as_str()) {
            classification.associations.push(resolved);
            classification.association_fields.push(field);
        } else {
            classification.attributes.push(field);
        }
    }
    classification
}
