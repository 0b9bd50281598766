//! Markdown diagram blocks
//!
//! A fenced code block whose info string is `<notation> umldoc [options]` is
//! an *annotated* block. The editor copies a document through unchanged
//! except for the bodies of annotated blocks, which are replaced by a freshly
//! generated diagram:
//!
//! ````markdown
//! ```mermaid umldoc entities=Customer,Order associations=inferred
//! (anything here is regenerated)
//! ```
//! ````
//!
//! A block ends at the first line made only of backticks, at least as many
//! as its opening fence has, so a longer fence can wrap examples like the
//! one above.
//!
//! Options:
//! - `entities=A,B` draws only the listed entities (default: all)
//! - `associations=declared|inferred` picks the association source

use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, span, Level};

use crate::core::{AssociationMode, Entity, RenderConfig, Result, UmlError};
use crate::model::ModelDocument;
use crate::plugins::GeneratorRegistry;

/// Marker word following the notation in an annotated fence
pub const MARKER: &str = "umldoc";

const FENCE: &str = "```";

/// Parsed info string of an annotated block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-based line of the opening fence
    pub line: usize,
    pub notation: String,
    /// Entities to draw, `None` for all
    pub entities: Option<Vec<String>>,
    pub associations: AssociationMode,
}

impl Annotation {
    /// Parse an opening fence line, `Ok(None)` when it is not annotated
    pub fn parse(text: &str, line: usize) -> Result<Option<Self>> {
        let Some(info) = text.trim().strip_prefix(FENCE) else {
            return Ok(None);
        };
        let mut tokens = info.trim_start_matches('`').split_whitespace();
        let (Some(notation), Some(MARKER)) = (tokens.next(), tokens.next()) else {
            return Ok(None);
        };

        let mut annotation = Annotation {
            line,
            notation: notation.to_lowercase(),
            entities: None,
            associations: AssociationMode::default(),
        };

        for token in tokens {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| UmlError::annotation(format!("expected key=value, got '{}'", token), line))?;
            match key {
                "entities" => {
                    annotation.entities = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(String::from)
                            .collect(),
                    );
                }
                "associations" => {
                    annotation.associations = value
                        .parse::<AssociationMode>()
                        .map_err(|e| UmlError::annotation(e, line))?;
                }
                other => {
                    return Err(UmlError::annotation(format!("unknown option '{}'", other), line));
                }
            }
        }

        Ok(Some(annotation))
    }

    /// Render configuration for this block
    pub fn config(&self) -> RenderConfig {
        RenderConfig::new(self.notation.clone(), self.associations)
    }
}

/// Backtick count of an opening fence line
fn fence_width(line: &str) -> Option<usize> {
    let width = line.trim_start().chars().take_while(|&c| c == '`').count();
    (width >= FENCE.len()).then_some(width)
}

/// Whether `line` closes a fence opened with `width` backticks
fn closes_fence(line: &str, width: usize) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= width && trimmed.chars().all(|c| c == '`')
}

/// List the annotated blocks of a document
pub fn scan(text: &str) -> Result<Vec<Annotation>> {
    let mut annotations = Vec::new();
    // (annotation if the block is annotated, opening fence width)
    let mut open: Option<(Option<Annotation>, usize)> = None;

    for (index, line) in text.lines().enumerate() {
        match open.take() {
            None => {
                if let Some(width) = fence_width(line) {
                    open = Some((Annotation::parse(line, index + 1)?, width));
                }
            }
            Some((block, width)) if closes_fence(line, width) => {
                if let Some(annotation) = block {
                    annotations.push(annotation);
                }
            }
            Some(block) => open = Some(block),
        }
    }

    if let Some((Some(annotation), _)) = open {
        return Err(UmlError::annotation("unterminated umldoc block", annotation.line));
    }
    Ok(annotations)
}

/// Rewrites annotated blocks of markdown documents from a model
pub struct Editor<'m> {
    model: &'m ModelDocument,
    registry: GeneratorRegistry,
}

impl<'m> Editor<'m> {
    /// Create an editor using all built-in notations
    pub fn new(model: &'m ModelDocument) -> Self {
        Self::with_registry(model, GeneratorRegistry::with_all_plugins())
    }

    pub fn with_registry(model: &'m ModelDocument, registry: GeneratorRegistry) -> Self {
        Self { model, registry }
    }

    fn selected_entities(&self, annotation: &Annotation) -> Result<Vec<Entity>> {
        let Some(names) = &annotation.entities else {
            return Ok(self.model.entities.clone());
        };
        if let Some(missing) = names.iter().find(|n| self.model.entity(n).is_none()) {
            return Err(UmlError::annotation(
                format!("unknown entity '{}'", missing),
                annotation.line,
            ));
        }
        let wanted: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        Ok(self
            .model
            .entities
            .iter()
            .filter(|e| wanted.contains(e.name.as_str()))
            .cloned()
            .collect())
    }

    /// Write the diagram for one annotated block
    pub fn generate_block(&self, annotation: &Annotation, sink: &mut dyn Write) -> Result<()> {
        debug!(
            line = annotation.line,
            notation = %annotation.notation,
            mode = %annotation.associations,
            "Regenerating block"
        );
        let entities = self.selected_entities(annotation)?;
        let names: BTreeSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();

        // Inferred blocks never look at the declared list
        let declared = match annotation.associations {
            AssociationMode::Declared => {
                let mut declared = self.model.associations()?;
                declared.retain(|a| {
                    names.contains(a.left.entity.name.as_str())
                        && names.contains(a.right.entity.name.as_str())
                });
                declared
            }
            AssociationMode::Inferred => Vec::new(),
        };

        self.registry
            .render(&annotation.config(), sink, &entities, &declared)
    }

    /// Copy a document from `reader` to `writer`, regenerating annotated blocks
    ///
    /// Returns the number of regenerated blocks. On error the writer may hold
    /// a partial document.
    pub fn edit<R: BufRead, W: Write>(&self, mut reader: R, writer: &mut W) -> Result<usize> {
        let edit_span = span!(Level::INFO, "edit_document");
        let _enter = edit_span.enter();

        let mut regenerated = 0;
        let mut line_no = 0;
        let mut line = String::new();
        let mut plain_fence: Option<usize> = None;
        let mut annotated: Option<(Annotation, usize)> = None;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;

            if let Some((annotation, width)) = &annotated {
                if closes_fence(&line, *width) {
                    self.generate_block(annotation, writer)?;
                    writer.write_all(line.as_bytes())?;
                    annotated = None;
                    regenerated += 1;
                }
                continue;
            }

            writer.write_all(line.as_bytes())?;
            if let Some(width) = plain_fence {
                if closes_fence(&line, width) {
                    plain_fence = None;
                }
            } else if let Some(width) = fence_width(&line) {
                match Annotation::parse(&line, line_no)? {
                    Some(annotation) => annotated = Some((annotation, width)),
                    None => plain_fence = Some(width),
                }
            }
        }

        if let Some((annotation, _)) = annotated {
            return Err(UmlError::annotation("unterminated umldoc block", annotation.line));
        }

        info!(blocks = regenerated, "Document edited");
        Ok(regenerated)
    }

    /// Edit an in-memory document
    pub fn edit_str(&self, text: &str) -> Result<String> {
        let mut output = Vec::new();
        self.edit(text.as_bytes(), &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Edit a file, writing the result to `output` only when the whole document succeeded
    pub fn edit_file(&self, input: &Path, output: &Path) -> anyhow::Result<usize> {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
        let mut buffer = Vec::new();
        let blocks = self
            .edit(text.as_bytes(), &mut buffer)
            .with_context(|| format!("Failed to edit '{}'", input.display()))?;
        fs::write(output, buffer)
            .with_context(|| format!("Failed to write output file '{}'", output.display()))?;
        Ok(blocks)
    }
}
