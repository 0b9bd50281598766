//! Core generator trait for diagram output
//!
//! This trait defines the interface every notation backend implements:
//! write a complete diagram for an entity/association set to a sink.

use std::io::Write;

use super::error::Result;
use super::model::{AssociationDependency, Entity};

/// Core trait for diagram generators
///
/// A generator is stateless; the same instance may serve concurrent renders
/// as long as each render has its own sink.
///
/// # Example
/// ```
/// use umldoc::core::{Entity, Field, Generator, Modifier};
/// use umldoc::plugins::mermaid::MermaidGenerator;
///
/// let entities = vec![Entity::new("Order").with_field(Field::new("id", "int").with_modifier(Modifier::Private))];
/// let mut out = Vec::new();
/// MermaidGenerator::new().generate(&mut out, &entities, &[]).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("class Order {"));
/// ```
pub trait Generator: Send + Sync {
    /// Write the diagram for the given entities and associations
    fn generate(
        &self,
        sink: &mut dyn Write,
        entities: &[Entity],
        associations: &[AssociationDependency<'_>],
    ) -> Result<()>;

    /// Registry key of the notation this generator emits
    fn notation(&self) -> &'static str;

    /// Short human-readable description
    fn description(&self) -> &'static str;

    /// Get the version of this generator
    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Resolve the label of every association up front
///
/// Generators call this before writing so that a structurally invalid
/// association aborts the render with nothing written.
pub fn resolve_labels<'s>(associations: &'s [AssociationDependency<'_>]) -> Result<Vec<&'s str>> {
    associations.iter().map(|a| a.label()).collect()
}

/// Render into an in-memory string
pub fn generate_to_string(
    generator: &dyn Generator,
    entities: &[Entity],
    associations: &[AssociationDependency<'_>],
) -> Result<String> {
    let mut buffer = Vec::new();
    generator.generate(&mut buffer, entities, associations)?;
    // Generators only write str data
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cardinality, Side, UmlError};

    #[test]
    fn test_resolve_labels() {
        let a = Entity::new("A");
        let b = Entity::new("B");
        let associations = vec![
            AssociationDependency {
                left: Side::new(&a, Cardinality::One).with_label("uses"),
                right: Side::new(&b, Cardinality::One),
            },
            AssociationDependency {
                left: Side::new(&a, Cardinality::One),
                right: Side::new(&b, Cardinality::Many),
            },
        ];

        assert_eq!(resolve_labels(&associations).unwrap(), vec!["uses", ""]);
    }

    #[test]
    fn test_resolve_labels_rejects_double_label() {
        let a = Entity::new("A");
        let b = Entity::new("B");
        let associations = vec![AssociationDependency {
            left: Side::new(&a, Cardinality::One).with_label("x"),
            right: Side::new(&b, Cardinality::One).with_label("y"),
        }];

        assert!(matches!(
            resolve_labels(&associations),
            Err(UmlError::StructuralInput { .. })
        ));
    }
}
