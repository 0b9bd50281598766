//! Core error types for diagram generation
//!
//! This module defines the error taxonomy surfaced by the generators, the
//! model loader and the markdown editor.

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("Structural input error: {message}")]
    StructuralInput { message: String },

    #[error("Unresolved association reference: no entity named '{entity}'")]
    UnresolvedAssociationReference { entity: String },

    #[error("Unknown notation: {notation}")]
    UnknownNotation { notation: String },

    #[error("Annotation error: {message} at line {line}")]
    Annotation { message: String, line: usize },

    #[error("Model error: {source}")]
    Model {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl UmlError {
    /// Create a new structural input error
    pub fn structural_input(message: impl Into<String>) -> Self {
        Self::StructuralInput {
            message: message.into(),
        }
    }

    /// Create a new unresolved reference error
    pub fn unresolved(entity: impl Into<String>) -> Self {
        Self::UnresolvedAssociationReference {
            entity: entity.into(),
        }
    }

    /// Create a new unknown notation error
    pub fn unknown_notation(notation: impl Into<String>) -> Self {
        Self::UnknownNotation {
            notation: notation.into(),
        }
    }

    /// Create a new annotation error
    pub fn annotation(message: impl Into<String>, line: usize) -> Self {
        Self::Annotation {
            message: message.into(),
            line,
        }
    }

    /// Returns true for errors caused by the shape of the input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::StructuralInput { .. }
                | Self::UnresolvedAssociationReference { .. }
                | Self::Annotation { .. }
                | Self::Model { .. }
        )
    }
}

/// Result alias used across the library
pub type Result<T, E = UmlError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_input_error() {
        let error = UmlError::structural_input("both sides are labeled");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Structural input error"));
        assert!(error_msg.contains("both sides are labeled"));
        assert!(error.is_input_error());
    }

    #[test]
    fn test_unresolved_error() {
        let error = UmlError::unresolved("Ghost");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unresolved association reference"));
        assert!(error_msg.contains("'Ghost'"));
    }

    #[test]
    fn test_unknown_notation_error() {
        let error = UmlError::unknown_notation("graphviz");
        assert_eq!(error.to_string(), "Unknown notation: graphviz");
        assert!(!error.is_input_error());
    }

    #[test]
    fn test_annotation_error() {
        let error = UmlError::annotation("unterminated block", 12);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("unterminated block"));
        assert!(error_msg.contains("line 12"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error: UmlError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("pipe closed"));
        assert!(!error.is_input_error());
    }

    #[test]
    fn test_model_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: UmlError = json_err.into();
        assert!(error.to_string().starts_with("Model error"));
    }
}
