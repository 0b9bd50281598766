//! Property tests for type resolution, modifier encoding and rendering

use std::collections::BTreeSet;

use proptest::prelude::*;
use umldoc::core::resolver::{is_generic, resolve};
use umldoc::prelude::*;
use umldoc::{effective_visibility, render, MermaidModifiers, PlantUmlModifiers};

fn modifier() -> impl Strategy<Value = Modifier> {
    prop_oneof![
        Just(Modifier::Public),
        Just(Modifier::Protected),
        Just(Modifier::Package),
        Just(Modifier::Private),
        Just(Modifier::Static),
        Just(Modifier::Final),
    ]
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,10}"
}

proptest! {
    #[test]
    fn resolve_unwraps_one_generic_level(name in identifier(), wrapper in identifier()) {
        let raw = format!("{}<{}>;", wrapper, name);
        prop_assert_eq!(resolve(&raw), name.clone());
        prop_assert!(is_generic(&raw));
        prop_assert_eq!(resolve(&name), name.clone());
        prop_assert!(!is_generic(&name));
    }

    #[test]
    fn encoding_ignores_insertion_order(modifiers in proptest::collection::vec(modifier(), 0..8)) {
        let forward: BTreeSet<Modifier> = modifiers.iter().copied().collect();
        let backward: BTreeSet<Modifier> = modifiers.iter().rev().copied().collect();

        prop_assert_eq!(MermaidModifiers.encode(&forward), MermaidModifiers.encode(&backward));
        prop_assert_eq!(PlantUmlModifiers.encode(&forward), PlantUmlModifiers.encode(&backward));
    }

    #[test]
    fn mermaid_prefix_follows_visibility_priority(modifiers in proptest::collection::btree_set(modifier(), 0..6)) {
        let expected = match effective_visibility(&modifiers) {
            Some(Modifier::Public) => "+",
            Some(Modifier::Protected) => "#",
            Some(Modifier::Package) => "~",
            Some(Modifier::Private) => "-",
            _ => "",
        };
        let decoration = MermaidModifiers.encode(&modifiers);
        prop_assert_eq!(decoration.prefix.as_str(), expected);
        prop_assert_eq!(decoration.suffix.contains('$'), modifiers.contains(&Modifier::Static));
        prop_assert_eq!(decoration.suffix.contains('*'), modifiers.contains(&Modifier::Final));
    }

    #[test]
    fn rendering_is_idempotent(
        fields in proptest::collection::vec(
            (identifier(), identifier(), proptest::collection::btree_set(modifier(), 0..4)),
            0..5,
        ),
        notation in prop_oneof![Just("mermaid"), Just("plantuml")],
    ) {
        let mut entity = Entity::new("Subject");
        for (name, type_name, modifiers) in fields {
            entity.add_field(Field::new(name.to_lowercase(), type_name).with_modifiers(modifiers));
        }
        let other = Entity::new("Other");
        let association = AssociationDependency {
            left: Side::new(&entity, Cardinality::One),
            right: Side::new(&other, Cardinality::ZeroOrMany).navigable(),
        };
        let entities = vec![entity.clone(), other.clone()];

        let first = render(notation, &entities, &[association.clone()]).unwrap();
        let second = render(notation, &entities, &[association]).unwrap();
        prop_assert_eq!(first, second);
    }
}
