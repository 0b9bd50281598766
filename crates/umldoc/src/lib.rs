//! umldoc - Render UML class diagrams from an entity model
//!
//! A library for turning entities (classes with fields and modifiers) and the
//! associations between them into Mermaid or PlantUML class diagram markup.
//!
//! # Quick Start
//!
//! ```rust
//! use umldoc::prelude::*;
//!
//! let entities = vec![
//!     Entity::new("Order")
//!         .with_field(Field::new("id", "int").with_modifier(Modifier::Private))
//!         .with_field(Field::new("total", "double").with_modifier(Modifier::Private)),
//! ];
//!
//! let diagram = umldoc::render("mermaid", &entities, &[]).unwrap();
//! assert!(diagram.starts_with("classDiagram\n    direction TB\n"));
//! assert!(diagram.contains("      -id\n"));
//! ```
//!
//! # Inferred Associations
//!
//! Fields whose (generic-unwrapped) type names another entity can be drawn
//! as association edges instead of attributes:
//!
//! ```rust
//! use umldoc::prelude::*;
//!
//! let entities = vec![
//!     Entity::new("Customer").with_field(Field::new("orders", "List<Order>")),
//!     Entity::new("Order"),
//! ];
//!
//! let diagram = umldoc::render_inferred("mermaid", &entities).unwrap();
//! assert!(diagram.contains("Customer ONE --> MANY Order orders"));
//! ```

pub mod core;
pub mod editor;
pub mod model;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AssociationDependency, AssociationMode, AssociationSource, Cardinality,
        DeclaredAssociations, Entity, Field, Generator, InferredAssociations, Modifier,
        ModifierEncoder, Notation, RenderConfig, Side, UmlError,
    };
    pub use crate::editor::Editor;
    pub use crate::model::ModelDocument;
    pub use crate::plugins::GeneratorRegistry;
}

/// Render entities and declared associations in the given notation
///
/// # Example
/// ```rust
/// use umldoc::prelude::*;
///
/// let customer = Entity::new("Customer");
/// let order = Entity::new("Order");
/// let places = AssociationDependency::try_new(
///     Side::new(&customer, Cardinality::One),
///     Side::new(&order, Cardinality::ZeroOrMany).navigable().with_label("places"),
/// )
/// .unwrap();
///
/// let entities = [customer.clone(), order.clone()];
/// let diagram = umldoc::render("plantuml", &entities, &[places]).unwrap();
/// assert!(diagram.contains("Customer \"1\" --> \"0..*\" Order : places"));
/// ```
pub fn render(
    notation: &str,
    entities: &[Entity],
    associations: &[AssociationDependency<'_>],
) -> Result<String> {
    let registry = plugins::GeneratorRegistry::with_all_plugins();
    generate_to_string(registry.get(notation)?, entities, associations)
}

/// Render entities with associations inferred from their field types
pub fn render_inferred(notation: &str, entities: &[Entity]) -> Result<String> {
    let config = RenderConfig::new(notation, AssociationMode::Inferred);
    plugins::GeneratorRegistry::with_all_plugins().render_to_string(&config, entities, &[])
}
