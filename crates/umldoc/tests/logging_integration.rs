//! Integration tests for tracing spans and events
//!
//! Rendering must behave the same whether or not a subscriber is listening.

use umldoc::core::logging::{init_logging, LogFormat};
use umldoc::prelude::*;
use umldoc::{render, render_inferred};
use tracing_subscriber::util::SubscriberInitExt;

fn shop() -> Vec<Entity> {
    vec![
        Entity::new("Customer")
            .with_field(Field::new("name", "String").with_modifier(Modifier::Private))
            .with_field(Field::new("orders", "List<Order>")),
        Entity::new("Order"),
    ]
}

#[test]
fn test_tracing_spans_during_render() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let result = render_inferred("mermaid", &shop());
    assert!(result.is_ok());
    assert!(result.unwrap().contains("Customer ONE --> MANY Order orders"));
}

#[test]
fn test_output_unaffected_by_subscriber() {
    let entities = shop();
    let silent = render("plantuml", &entities, &[]).unwrap();

    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();
    let traced = render("plantuml", &entities, &[]).unwrap();

    assert_eq!(silent, traced);
}

#[test]
fn test_editor_with_tracing() {
    let _ = init_logging(Some("debug"), Some("compact"));

    let model = ModelDocument {
        entities: shop(),
        associations: Vec::new(),
    };
    let edited = Editor::new(&model)
        .edit_str("# Shop\n```mermaid umldoc\nold\n```\n")
        .unwrap();

    assert!(edited.starts_with("# Shop\n```mermaid umldoc\nclassDiagram\n"));
    assert!(!edited.contains("old"));
}

#[test]
fn test_unknown_notation_logged_and_returned() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .set_default();

    let result = render("dot", &shop(), &[]);
    assert!(matches!(result, Err(UmlError::UnknownNotation { .. })));
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("xml".parse::<LogFormat>().is_err());
    assert!(LogFormat::variants().contains(&"compact"));
}
