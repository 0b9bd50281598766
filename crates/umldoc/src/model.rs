//! JSON model documents
//!
//! A model document carries the entities and declared associations of a
//! program. Associations name their entities; [`ModelDocument::associations`]
//! resolves those names into borrowed [`Side`]s.
//!
//! ```json
//! {
//!   "entities": [
//!     { "name": "Customer", "fields": [{ "name": "name", "type": "String", "modifiers": ["PRIVATE"] }] },
//!     { "name": "Order", "stereotype": "entity" }
//!   ],
//!   "associations": [
//!     {
//!       "left": { "entity": "Customer", "cardinality": "ONE" },
//!       "right": { "entity": "Order", "cardinality": "ZERO_OR_MANY", "navigability": true, "label": "places" }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AssociationDependency, Cardinality, Entity, Result, Side, UmlError};

/// One end of an association, referring to its entity by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSpec {
    pub entity: String,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub navigability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SideSpec {
    fn resolve<'a>(&self, entities: &'a [Entity]) -> Result<Side<'a>> {
        let entity = entities
            .iter()
            .find(|e| e.name == self.entity)
            .ok_or_else(|| UmlError::unresolved(&self.entity))?;
        Ok(Side {
            entity,
            cardinality: self.cardinality,
            navigability: self.navigability,
            label: self.label.clone(),
        })
    }
}

impl From<&Side<'_>> for SideSpec {
    fn from(side: &Side<'_>) -> Self {
        Self {
            entity: side.entity.name.clone(),
            cardinality: side.cardinality,
            navigability: side.navigability,
            label: side.label.clone(),
        }
    }
}

/// Association between two named entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationSpec {
    pub left: SideSpec,
    pub right: SideSpec,
}

impl From<&AssociationDependency<'_>> for AssociationSpec {
    fn from(association: &AssociationDependency<'_>) -> Self {
        Self {
            left: SideSpec::from(&association.left),
            right: SideSpec::from(&association.right),
        }
    }
}

/// Entities and declared associations of one program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub associations: Vec<AssociationSpec>,
}

impl ModelDocument {
    /// Parse a model from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let document: ModelDocument = serde_json::from_str(text)?;
        debug!(
            entities = document.entities.len(),
            associations = document.associations.len(),
            "Model parsed"
        );
        Ok(document)
    }

    /// Read and parse a model file
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file '{}'", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse model file '{}'", path.display()))
    }

    /// Look up an entity by name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Resolve the declared associations against this document's entities
    ///
    /// Fails on a name that matches no entity and on associations labeled on
    /// both sides.
    pub fn associations(&self) -> Result<Vec<AssociationDependency<'_>>> {
        self.associations
            .iter()
            .map(|spec| {
                AssociationDependency::try_new(
                    spec.left.resolve(&self.entities)?,
                    spec.right.resolve(&self.entities)?,
                )
            })
            .collect()
    }
}
