//! Domain model for class diagrams
//!
//! Entities, their fields and modifiers, and the directed associations
//! between entities. These are plain values: generators only read them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::{Result, UmlError};

/// Visibility or storage qualifier on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Package,
    Static,
    Final,
}

impl Modifier {
    /// Returns true for the visibility group (public, private, protected, package)
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected | Modifier::Package
        )
    }

    /// Stable upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Public => "PUBLIC",
            Modifier::Private => "PRIVATE",
            Modifier::Protected => "PROTECTED",
            Modifier::Package => "PACKAGE",
            Modifier::Static => "STATIC",
            Modifier::Final => "FINAL",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multiplicity of one side of an association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    #[default]
    One,
    ZeroOrOne,
    Many,
    ZeroOrMany,
    OneOrMany,
}

impl Cardinality {
    pub const ALL: [Cardinality; 5] = [
        Cardinality::One,
        Cardinality::ZeroOrOne,
        Cardinality::Many,
        Cardinality::ZeroOrMany,
        Cardinality::OneOrMany,
    ];

    /// Stable display name, e.g. `ZERO_OR_MANY`
    pub fn name(self) -> &'static str {
        match self {
            Cardinality::One => "ONE",
            Cardinality::ZeroOrOne => "ZERO_OR_ONE",
            Cardinality::Many => "MANY",
            Cardinality::ZeroOrMany => "ZERO_OR_MANY",
            Cardinality::OneOrMany => "ONE_OR_MANY",
        }
    }

    /// UML multiplicity text, e.g. `0..*`
    pub fn multiplicity(self) -> &'static str {
        match self {
            Cardinality::One => "1",
            Cardinality::ZeroOrOne => "0..1",
            Cardinality::Many => "*",
            Cardinality::ZeroOrMany => "0..*",
            Cardinality::OneOrMany => "1..*",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cardinality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cardinality::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown cardinality: {}", s))
    }
}

/// One member of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Raw textual type, possibly generic (`List<Order>`)
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: BTreeSet::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }
}

/// A modeled class or type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Free-text classifier tag such as `interface`, empty when absent
    #[serde(default)]
    pub stereotype: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stereotype: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotype = stereotype.into();
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Copy of this entity restricted to the given fields
    pub fn with_only_fields<'f>(&self, fields: impl IntoIterator<Item = &'f Field>) -> Entity {
        Entity {
            name: self.name.clone(),
            stereotype: self.stereotype.clone(),
            fields: fields.into_iter().cloned().collect(),
        }
    }
}

/// One end of an association
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side<'a> {
    pub entity: &'a Entity,
    pub cardinality: Cardinality,
    /// Whether the relation is traversable towards this side
    pub navigability: bool,
    pub label: Option<String>,
}

impl<'a> Side<'a> {
    pub fn new(entity: &'a Entity, cardinality: Cardinality) -> Self {
        Self {
            entity,
            cardinality,
            navigability: false,
            label: None,
        }
    }

    pub fn navigable(mut self) -> Self {
        self.navigability = true;
        self
    }

    pub fn with_navigability(mut self, navigability: bool) -> Self {
        self.navigability = navigability;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label if present and non-empty
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}

/// Directed relationship between two entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDependency<'a> {
    pub left: Side<'a>,
    pub right: Side<'a>,
}

impl<'a> AssociationDependency<'a> {
    /// Build an association, rejecting labels on both sides
    pub fn try_new(left: Side<'a>, right: Side<'a>) -> Result<Self> {
        let association = Self { left, right };
        association.label()?;
        Ok(association)
    }

    /// The single label of this association, empty when neither side has one
    pub fn label(&self) -> Result<&str> {
        match (self.left.label(), self.right.label()) {
            (Some(_), Some(_)) => Err(UmlError::structural_input(format!(
                "only one side of the association {} -- {} can hold the label",
                self.left.entity.name, self.right.entity.name
            ))),
            (Some(label), None) | (None, Some(label)) => Ok(label),
            (None, None) => Ok(""),
        }
    }
}
