//! Notation plugins
//!
//! Each plugin implements [`Generator`](crate::core::Generator) for one
//! diagram notation. The registry ties them together by notation key.

#[cfg(feature = "mermaid")]
pub mod mermaid;
#[cfg(feature = "plantuml")]
pub mod plantuml;
pub mod registry;

#[cfg(feature = "mermaid")]
pub use mermaid::*;
#[cfg(feature = "plantuml")]
pub use plantuml::*;
pub use registry::*;
