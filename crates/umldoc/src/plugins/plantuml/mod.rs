//! PlantUML notation plugin
//!
//! Renders class diagrams as PlantUML `@startuml` blocks.

mod generator;

pub use generator::PlantUmlGenerator;
