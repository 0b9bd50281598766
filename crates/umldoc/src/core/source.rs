//! Association sources
//!
//! A render takes its associations from exactly one source: either the list
//! the caller declared, or edges inferred from field types. The two are
//! never reconciled with each other.

use std::borrow::Cow;

use super::classifier::{classify, known_entity_names};
use super::model::{AssociationDependency, Cardinality, Entity, Side};
use super::resolver::is_generic;

/// Strategy supplying the entities and associations of a render
pub trait AssociationSource<'a> {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Entities as they should be drawn
    fn entities(&self, entities: &'a [Entity]) -> Cow<'a, [Entity]>;

    /// Associations to draw between them
    fn associations(&self, entities: &'a [Entity]) -> Vec<AssociationDependency<'a>>;
}

/// Associations supplied by the caller, drawn as given
#[derive(Debug, Clone, Copy)]
pub struct DeclaredAssociations<'a> {
    associations: &'a [AssociationDependency<'a>],
}

impl<'a> DeclaredAssociations<'a> {
    pub fn new(associations: &'a [AssociationDependency<'a>]) -> Self {
        Self { associations }
    }
}

impl<'a> AssociationSource<'a> for DeclaredAssociations<'a> {
    fn name(&self) -> &'static str {
        "declared"
    }

    fn entities(&self, entities: &'a [Entity]) -> Cow<'a, [Entity]> {
        Cow::Borrowed(entities)
    }

    fn associations(&self, _entities: &'a [Entity]) -> Vec<AssociationDependency<'a>> {
        self.associations.to_vec()
    }
}

/// Associations derived from fields whose type names another entity
///
/// Each association field becomes one edge from its owner (`ONE`, not
/// navigable) to the referenced entity (navigable, labeled with the field
/// name). A generic field type yields `MANY` on the target side. Association
/// fields are removed from the drawn entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferredAssociations;

impl<'a> AssociationSource<'a> for InferredAssociations {
    fn name(&self) -> &'static str {
        "inferred"
    }

    fn entities(&self, entities: &'a [Entity]) -> Cow<'a, [Entity]> {
        let known = known_entity_names(entities);
        Cow::Owned(
            entities
                .iter()
                .map(|entity| entity.with_only_fields(classify(&entity.fields, &known).attributes))
                .collect(),
        )
    }

    fn associations(&self, entities: &'a [Entity]) -> Vec<AssociationDependency<'a>> {
        let known = known_entity_names(entities);
        let mut associations = Vec::new();

        for owner in entities {
            let classification = classify(&owner.fields, &known);
            let evidence = classification
                .associations
                .iter()
                .zip(&classification.association_fields);

            for (target_name, field) in evidence {
                let Some(target) = entities.iter().find(|e| &e.name == target_name) else {
                    continue;
                };
                let cardinality = if is_generic(&field.type_name) {
                    Cardinality::Many
                } else {
                    Cardinality::One
                };
                associations.push(AssociationDependency {
                    left: Side::new(owner, Cardinality::One),
                    right: Side::new(target, cardinality)
                        .navigable()
                        .with_label(field.name.clone()),
                });
            }
        }

        associations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Modifier};

    fn shop() -> Vec<Entity> {
        vec![
            Entity::new("Customer")
                .with_field(Field::new("name", "String").with_modifier(Modifier::Private))
                .with_field(Field::new("orders", "List<Order>").with_modifier(Modifier::Private)),
            Entity::new("Order")
                .with_field(Field::new("id", "int"))
                .with_field(Field::new("buyer", "Customer;")),
        ]
    }

    #[test]
    fn test_declared_passes_through() {
        let entities = shop();
        let declared = vec![AssociationDependency {
            left: Side::new(&entities[0], Cardinality::One),
            right: Side::new(&entities[1], Cardinality::ZeroOrMany).navigable(),
        }];

        let source = DeclaredAssociations::new(&declared);
        assert_eq!(source.name(), "declared");
        assert_eq!(source.associations(&entities), declared);
        assert!(matches!(source.entities(&entities), Cow::Borrowed(_)));
    }

    #[test]
    fn test_inferred_edges() {
        let entities = shop();
        let associations = InferredAssociations.associations(&entities);

        assert_eq!(associations.len(), 2);

        let first = &associations[0];
        assert_eq!(first.left.entity.name, "Customer");
        assert_eq!(first.left.cardinality, Cardinality::One);
        assert!(!first.left.navigability);
        assert_eq!(first.right.entity.name, "Order");
        assert_eq!(first.right.cardinality, Cardinality::Many);
        assert!(first.right.navigability);
        assert_eq!(first.label().unwrap(), "orders");

        let second = &associations[1];
        assert_eq!(second.left.entity.name, "Order");
        assert_eq!(second.right.entity.name, "Customer");
        assert_eq!(second.right.cardinality, Cardinality::One);
    }

    #[test]
    fn test_inferred_entities_keep_only_attributes() {
        let entities = shop();
        let drawn = InferredAssociations.entities(&entities);

        assert_eq!(drawn.len(), 2);
        let names: Vec<_> = drawn[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name"]);
        let names: Vec<_> = drawn[1].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id"]);
    }

    #[test]
    fn test_inferred_without_entity_fields() {
        let entities = vec![Entity::new("Lonely").with_field(Field::new("count", "int"))];
        assert!(InferredAssociations.associations(&entities).is_empty());
        assert_eq!(InferredAssociations.entities(&entities)[0].fields.len(), 1);
    }
}
