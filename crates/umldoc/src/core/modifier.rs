//! Modifier encoding
//!
//! Maps a field's modifier set to the decoration a notation puts around the
//! field name. Visibility is picked from a fixed priority table so that the
//! result never depends on the order the set is walked in.

use std::collections::BTreeSet;

use super::model::{Field, Modifier};

/// Visibility precedence, highest first
pub const VISIBILITY_PRIORITY: [Modifier; 4] = [
    Modifier::Public,
    Modifier::Protected,
    Modifier::Package,
    Modifier::Private,
];

/// Text placed before and after a field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn apply(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

/// The visibility that wins when several are present
pub fn effective_visibility(modifiers: &BTreeSet<Modifier>) -> Option<Modifier> {
    VISIBILITY_PRIORITY
        .into_iter()
        .find(|m| modifiers.contains(m))
}

/// Notation-specific modifier encoding
pub trait ModifierEncoder: Send + Sync {
    /// Compute the decoration for a modifier set
    fn encode(&self, modifiers: &BTreeSet<Modifier>) -> Decoration;

    /// Render a field as `prefix + name + suffix`
    fn decorate(&self, field: &Field) -> String {
        self.encode(&field.modifiers).apply(&field.name)
    }
}

fn visibility_symbol(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Public => "+",
        Modifier::Private => "-",
        Modifier::Protected => "#",
        Modifier::Package => "~",
        Modifier::Static | Modifier::Final => "",
    }
}

/// Mermaid classifiers: `$` for static, `*` for final, appended in that order
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidModifiers;

impl ModifierEncoder for MermaidModifiers {
    fn encode(&self, modifiers: &BTreeSet<Modifier>) -> Decoration {
        let prefix = effective_visibility(modifiers)
            .map(visibility_symbol)
            .unwrap_or_default();

        let mut suffix = String::new();
        if modifiers.contains(&Modifier::Static) {
            suffix.push('$');
        }
        if modifiers.contains(&Modifier::Final) {
            suffix.push('*');
        }
        Decoration::new(prefix, suffix)
    }
}

/// PlantUML member modifiers: `{static}` leads, `{readOnly}` trails
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlModifiers;

impl ModifierEncoder for PlantUmlModifiers {
    fn encode(&self, modifiers: &BTreeSet<Modifier>) -> Decoration {
        let mut prefix = String::new();
        if modifiers.contains(&Modifier::Static) {
            prefix.push_str("{static} ");
        }
        if let Some(visibility) = effective_visibility(modifiers) {
            prefix.push_str(visibility_symbol(visibility));
        }

        let suffix = if modifiers.contains(&Modifier::Final) {
            " {readOnly}"
        } else {
            ""
        };
        Decoration::new(prefix, suffix)
    }
}
