//! Render configuration

use std::fmt;
use std::str::FromStr;

use super::notation::Notation;

/// Where the associations of a render come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AssociationMode {
    /// Use the association list supplied by the caller
    #[default]
    Declared,
    /// Derive associations from field types
    Inferred,
}

impl fmt::Display for AssociationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationMode::Declared => write!(f, "declared"),
            AssociationMode::Inferred => write!(f, "inferred"),
        }
    }
}

impl FromStr for AssociationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "declared" => Ok(AssociationMode::Declared),
            "inferred" => Ok(AssociationMode::Inferred),
            _ => Err(format!("Unknown association mode: {}", s)),
        }
    }
}

/// Settings for a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Registry key of the generator to use
    pub notation: String,
    pub associations: AssociationMode,
}

impl RenderConfig {
    pub fn new(notation: impl Into<String>, associations: AssociationMode) -> Self {
        Self {
            notation: notation.into(),
            associations,
        }
    }

    pub fn with_notation(mut self, notation: impl Into<String>) -> Self {
        self.notation = notation.into();
        self
    }

    pub fn with_associations(mut self, associations: AssociationMode) -> Self {
        self.associations = associations;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Notation::default().id(), AssociationMode::default())
    }
}

impl From<Notation> for RenderConfig {
    fn from(notation: Notation) -> Self {
        Self::default().with_notation(notation.id())
    }
}
