//! Core abstractions for class diagram generation
//!
//! This module holds the domain model, the field analysis that turns typed
//! fields into associations, and the traits every notation backend and
//! association source implements.

mod classifier;
mod config;
mod error;
mod generator;
pub mod logging;
mod model;
mod modifier;
mod notation;
pub mod resolver;
mod source;

pub use classifier::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use logging::*;
pub use model::*;
pub use modifier::*;
pub use notation::*;
pub use source::*;
