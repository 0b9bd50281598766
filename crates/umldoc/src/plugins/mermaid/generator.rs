//! Mermaid class diagram generator
//!
//! Emits a `classDiagram` block: a fixed header, one `class` block per entity
//! and one edge line per association.

use std::io::Write;

use tracing::{debug, span, trace, Level};

use crate::core::{
    resolve_labels, AssociationDependency, Entity, Generator, MermaidModifiers, ModifierEncoder,
    Result, Side,
};

const HEADER: &str = "classDiagram\n    direction TB\n\n";
const CLASS_INDENT: &str = "    ";
const MEMBER_INDENT: &str = "      ";

/// Build the arrow for an association
///
/// `<` leads when the left side is navigable, `>` trails when the right side
/// is: `--`, `<--`, `-->` or `<-->`.
pub fn arrow(left: &Side<'_>, right: &Side<'_>) -> String {
    let mut arrow = String::with_capacity(4);
    if left.navigability {
        arrow.push('<');
    }
    arrow.push_str("--");
    if right.navigability {
        arrow.push('>');
    }
    arrow
}

/// Stereotype as a Mermaid annotation, empty stays empty
fn annotation(stereotype: &str) -> String {
    let stereotype = stereotype.trim();
    if stereotype.is_empty() || stereotype.starts_with("<<") {
        stereotype.to_string()
    } else {
        format!("<<{}>>", stereotype)
    }
}

/// Write an indented line, leaving blank lines without trailing spaces
fn write_member(sink: &mut dyn Write, text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        writeln!(sink)
    } else {
        writeln!(sink, "{}{}", MEMBER_INDENT, text)
    }
}

/// Mermaid class diagram generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidGenerator {
    encoder: MermaidModifiers,
}

impl MermaidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_entity(&self, sink: &mut dyn Write, entity: &Entity) -> Result<()> {
        writeln!(sink, "{}class {} {{", CLASS_INDENT, entity.name)?;
        write_member(sink, &annotation(&entity.stereotype))?;
        if entity.fields.is_empty() {
            writeln!(sink)?;
        }
        for field in &entity.fields {
            write_member(sink, &self.encoder.decorate(field))?;
        }
        writeln!(sink, "{}}}", CLASS_INDENT)?;
        Ok(())
    }

    /// Format one association line, without indentation or newline
    pub fn association_line(&self, association: &AssociationDependency<'_>, label: &str) -> String {
        let left = &association.left;
        let right = &association.right;
        let line = format!(
            "{} {} {} {} {} {}",
            left.entity.name,
            left.cardinality.name(),
            arrow(left, right),
            right.cardinality.name(),
            right.entity.name,
            label
        );
        line.trim_end().to_string()
    }
}

impl Generator for MermaidGenerator {
    fn generate(
        &self,
        sink: &mut dyn Write,
        entities: &[Entity],
        associations: &[AssociationDependency<'_>],
    ) -> Result<()> {
        let generate_span = span!(
            Level::DEBUG,
            "generate_mermaid",
            entities = entities.len(),
            associations = associations.len()
        );
        let _enter = generate_span.enter();

        let labels = resolve_labels(associations)?;

        sink.write_all(HEADER.as_bytes())?;
        for entity in entities {
            trace!(entity = %entity.name, fields = entity.fields.len(), "Writing class block");
            self.write_entity(sink, entity)?;
        }
        for (association, label) in associations.iter().zip(labels) {
            let line = self.association_line(association, label);
            trace!(line = %line, "Writing association");
            writeln!(sink, "{}{}", CLASS_INDENT, line)?;
        }

        debug!("Mermaid diagram written");
        Ok(())
    }

    fn notation(&self) -> &'static str {
        "mermaid"
    }

    fn description(&self) -> &'static str {
        "Mermaid classDiagram markup"
    }
}
