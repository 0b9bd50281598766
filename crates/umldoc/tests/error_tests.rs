//! Tests for core error types

use umldoc::core::UmlError;

#[test]
fn test_structural_input_error() {
    let error = UmlError::structural_input("label given on both sides");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Structural input error"));
    assert!(error_msg.contains("both sides"));
    assert!(error.is_input_error());
}

#[test]
fn test_unresolved_reference_error() {
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
    let error = UmlError::annotation("unknown option 'color'", 12);
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Annotation error"));
    assert!(error_msg.contains("color"));
    assert!(error_msg.contains("line 12"));
}

#[test]
fn test_io_error() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "sink closed");
    let error: UmlError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("sink closed"));
    assert!(!error.is_input_error());
}

#[test]
fn test_model_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
    let error: UmlError = json_err.into();
    assert!(format!("{}", error).contains("Model error"));
    assert!(error.is_input_error());
}

#[test]
fn test_error_debug() {
    let error = UmlError::structural_input("Test");
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("StructuralInput"));
}
