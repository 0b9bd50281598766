//! PlantUML class diagram generator

use std::io::Write;

use tracing::{debug, span, trace, Level};

use crate::core::{
    resolve_labels, AssociationDependency, Entity, Generator, ModifierEncoder, PlantUmlModifiers,
    Result,
};

const HEADER: &str = "@startuml\ntop to bottom direction\n\n";
const FOOTER: &str = "@enduml\n";

/// PlantUML class diagram generator
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlGenerator {
    encoder: PlantUmlModifiers,
}

impl PlantUmlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_entity(&self, sink: &mut dyn Write, entity: &Entity) -> Result<()> {
        let stereotype = entity.stereotype.trim();
        let stereotype = stereotype
            .strip_prefix("<<")
            .and_then(|s| s.strip_suffix(">>"))
            .unwrap_or(stereotype);

        if stereotype.is_empty() {
            writeln!(sink, "class {} {{", entity.name)?;
        } else {
            writeln!(sink, "class {} <<{}>> {{", entity.name, stereotype)?;
        }
        for field in &entity.fields {
            writeln!(sink, "  {}", self.encoder.decorate(field))?;
        }
        writeln!(sink, "}}")?;
        Ok(())
    }

    /// Format one association line, without newline
    pub fn association_line(&self, association: &AssociationDependency<'_>, label: &str) -> String {
        let left = &association.left;
        let right = &association.right;

        let mut arrow = String::new();
        if left.navigability {
            arrow.push('<');
        }
        arrow.push_str("--");
        if right.navigability {
            arrow.push('>');
        }

        let mut line = format!(
            "{} \"{}\" {} \"{}\" {}",
            left.entity.name,
            left.cardinality.multiplicity(),
            arrow,
            right.cardinality.multiplicity(),
            right.entity.name
        );
        if !label.is_empty() {
            line.push_str(" : ");
            line.push_str(label);
        }
        line
    }
}

impl Generator for PlantUmlGenerator {
    fn generate(
        &self,
        sink: &mut dyn Write,
        entities: &[Entity],
        associations: &[AssociationDependency<'_>],
    ) -> Result<()> {
        let generate_span = span!(
            Level::DEBUG,
            "generate_plantuml",
            entities = entities.len(),
            associations = associations.len()
        );
        let _enter = generate_span.enter();

        let labels = resolve_labels(associations)?;

        sink.write_all(HEADER.as_bytes())?;
        for entity in entities {
            trace!(entity = %entity.name, "Writing class block");
            self.write_entity(sink, entity)?;
        }
        if !associations.is_empty() {
            writeln!(sink)?;
        }
        for (association, label) in associations.iter().zip(labels) {
            writeln!(sink, "{}", self.association_line(association, label))?;
        }
        sink.write_all(FOOTER.as_bytes())?;

        debug!("PlantUML diagram written");
        Ok(())
    }

    fn notation(&self) -> &'static str {
        "plantuml"
    }

    fn description(&self) -> &'static str {
        "PlantUML class diagram markup"
    }
}
