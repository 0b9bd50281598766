//! Generator registry
//!
//! Maps notation identifiers to generators and runs a render through the
//! pipeline: association source → generator → sink.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{
    AssociationDependency, AssociationMode, AssociationSource, DeclaredAssociations, Entity,
    Generator, InferredAssociations, Notation, RenderConfig, Result, UmlError,
};

/// Registry key for a notation name: trimmed, lowercase, aliases of the
/// built-in notations mapped to their id
fn notation_key(notation: &str) -> String {
    let key = notation.trim().to_lowercase();
    match key.parse::<Notation>() {
        Ok(builtin) => builtin.id().to_string(),
        Err(_) => key,
    }
}

/// Dispatch table of generators keyed by notation
///
/// New notations are added by registering another [`Generator`]; nothing else
/// changes.
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Create a registry with every built-in notation registered
    pub fn with_all_plugins() -> Self {
        let mut registry = Self::new();
        #[cfg(feature = "mermaid")]
        registry.register(Box::new(crate::plugins::mermaid::MermaidGenerator::new()));
        #[cfg(feature = "plantuml")]
        registry.register(Box::new(crate::plugins::plantuml::PlantUmlGenerator::new()));
        registry
    }

    /// Register a generator under its notation key, replacing any previous one
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        let key = notation_key(generator.notation());
        if self.generators.insert(key.clone(), generator).is_some() {
            debug!(notation = %key, "Replaced generator");
        }
    }

    /// Registered notation keys, sorted
    pub fn notations(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Iterate over all registered generators
    pub fn generators(&self) -> impl Iterator<Item = &dyn Generator> {
        self.generators.values().map(|g| g.as_ref())
    }

    /// Look up the generator for a notation
    pub fn get(&self, notation: &str) -> Result<&dyn Generator> {
        let key = notation_key(notation);
        self.generators
            .get(&key)
            .map(|g| g.as_ref())
            .ok_or_else(|| {
                warn!(notation, "No generator registered");
                UmlError::unknown_notation(notation)
            })
    }

    /// Render with explicit associations
    pub fn generate(
        &self,
        notation: &str,
        sink: &mut dyn Write,
        entities: &[Entity],
        associations: &[AssociationDependency<'_>],
    ) -> Result<()> {
        self.get(notation)?.generate(sink, entities, associations)
    }

    /// Render with associations taken from a source
    pub fn render_with<'a>(
        &self,
        notation: &str,
        sink: &mut dyn Write,
        entities: &'a [Entity],
        source: &dyn AssociationSource<'a>,
    ) -> Result<()> {
        let render_span = span!(
            Level::INFO,
            "render",
            notation,
            source = source.name(),
            entities = entities.len()
        );
        let _enter = render_span.enter();

        let generator = self.get(notation)?;

        let drawn = source.entities(entities);
        let associations = source.associations(entities);
        trace!(
            drawn = drawn.len(),
            associations = associations.len(),
            "Associations collected"
        );

        generator.generate(sink, &drawn, &associations)?;
        info!("Render completed");
        Ok(())
    }

    /// Render according to a configuration
    ///
    /// `declared` is consulted only in [`AssociationMode::Declared`].
    pub fn render<'a>(
        &self,
        config: &RenderConfig,
        sink: &mut dyn Write,
        entities: &'a [Entity],
        declared: &'a [AssociationDependency<'a>],
    ) -> Result<()> {
        match config.associations {
            AssociationMode::Declared => self.render_with(
                &config.notation,
                sink,
                entities,
                &DeclaredAssociations::new(declared),
            ),
            AssociationMode::Inferred => {
                self.render_with(&config.notation, sink, entities, &InferredAssociations)
            }
        }
    }

    /// Render according to a configuration into a string
    pub fn render_to_string<'a>(
        &self,
        config: &RenderConfig,
        entities: &'a [Entity],
        declared: &'a [AssociationDependency<'a>],
    ) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(config, &mut buffer, entities, declared)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_all_plugins()
    }
}
