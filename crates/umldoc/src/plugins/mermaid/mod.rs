//! Mermaid notation plugin
//!
//! Renders class diagrams as Mermaid `classDiagram` markup.

mod generator;

pub use generator::{arrow, MermaidGenerator};
