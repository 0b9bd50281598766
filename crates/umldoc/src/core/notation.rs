//! Built-in diagram notations
//!
//! Generators are looked up by notation identifier. The identifiers of the
//! notations shipped with the crate are collected here.

use std::fmt;
use std::str::FromStr;

/// Notation shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Notation {
    /// Mermaid `classDiagram`
    #[default]
    Mermaid,
    /// PlantUML `@startuml` class diagram
    PlantUml,
}

impl Notation {
    pub const ALL: [Notation; 2] = [Notation::Mermaid, Notation::PlantUml];

    /// Registry key of this notation
    pub fn id(self) -> &'static str {
        match self {
            Notation::Mermaid => "mermaid",
            Notation::PlantUml => "plantuml",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mermaid" => Ok(Notation::Mermaid),
            "plantuml" | "puml" => Ok(Notation::PlantUml),
            _ => Err(format!("Unknown notation: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_parsing() {
        assert_eq!(Notation::from_str("mermaid").unwrap(), Notation::Mermaid);
        assert_eq!(Notation::from_str("PlantUML").unwrap(), Notation::PlantUml);
        assert_eq!(Notation::from_str("puml").unwrap(), Notation::PlantUml);
        assert!(Notation::from_str("graphviz").is_err());
    }

    #[test]
    fn test_notation_ids() {
        let ids: Vec<_> = Notation::ALL.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["mermaid", "plantuml"]);
        assert_eq!(Notation::default().to_string(), "mermaid");
    }
}
