//! Normalization contract across every entity kind

use graph_domains::domains::relations::{knowledge, structure};
use graph_domains::{
    normalize, Concept, Document, DomainEntity, GraphError, Person, PropertyValue, ProvenanceRecord,
    Quote, Segment, Work, KNOWLEDGE, NAME_MAX_CHARS, STRUCTURE,
};
use rand::distributions::Alphanumeric;
use rand::Rng;

fn str_prop<'a>(node: &'a graph_domains::GraphNode, key: &str) -> Option<&'a str> {
    node.property(key).and_then(PropertyValue::as_str)
}

#[test]
fn person_scenario() {
    let node = normalize(
        Person::new("Sun Tzu").with_role("General").with_era("Ancient China"),
        &[],
    )
    .unwrap();

    assert_eq!(node.label(), "Person");
    let expected: Vec<(&str, &str)> = vec![("era", "Ancient China"), ("name", "Sun Tzu"), ("role", "General")];
    let actual: Vec<(&str, &str)> = node
        .properties()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str().unwrap()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn work_scenario_with_provenance() {
    let record = ProvenanceRecord::shared("plugin_a", "table_b", "row_1").unwrap();
    let work = Work::new("The Art of War").with_author("Sun Tzu").with_year(-500);
    let node = normalize(work, &[record]).unwrap();

    assert_eq!(str_prop(&node, "title"), Some("The Art of War"));
    assert_eq!(str_prop(&node, "name"), Some("The Art of War"));
    assert_eq!(str_prop(&node, "author_name"), Some("Sun Tzu"));
    assert_eq!(node.sources().len(), 1);
    assert_eq!(node.sources()[0].plugin_name, "plugin_a");
}

#[test]
fn quote_of_128_chars_gets_50_char_name() {
    let text: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect();
    let node = normalize(Quote::new(text.clone()), &[]).unwrap();

    let name = str_prop(&node, "name").unwrap();
    assert_eq!(name.len(), NAME_MAX_CHARS);
    assert_eq!(name, &text[..NAME_MAX_CHARS]);
    assert_eq!(str_prop(&node, "text"), Some(text.as_str()));
}

#[test]
fn name_derivation_holds_for_every_display_field() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..120);
        let text: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        let expected: String = text.chars().take(NAME_MAX_CHARS).collect();

        let entities: Vec<DomainEntity> = vec![
            Work::new(text.clone()).into(),
            Quote::new(text.clone()).into(),
            Document::new(text.clone()).into(),
            Segment::new(0, text.clone()).into(),
        ];
        for entity in entities {
            let kind = entity.kind();
            let node = entity.to_graph_node(&[]).unwrap();
            assert_eq!(str_prop(&node, "name"), Some(expected.as_str()), "{kind}");
            assert_eq!(str_prop(&node, kind.display_field()), Some(text.as_str()), "{kind}");
            if len <= NAME_MAX_CHARS {
                assert_eq!(str_prop(&node, "name"), Some(text.as_str()));
            }
        }
    }
}

#[test]
fn labels_match_variant_names_and_id_never_leaks() {
    let cases: Vec<(DomainEntity, &str)> = vec![
        (Person::new("Sun Tzu").into(), "Person"),
        (Work::new("The Art of War").into(), "Work"),
        (Concept::new("Deception").with_definition("All warfare is based on it").into(), "Concept"),
        (Quote::new("All warfare is based on deception.").with_speaker("Sun Tzu").into(), "Quote"),
        (Document::new("1. Laying Plans").with_uri("file:///war.txt").into(), "Document"),
        (Segment::new(0, "Sun Tzu said,").with_timing(0.0, 1.2).into(), "Segment"),
    ];
    for (entity, label) in cases {
        let node = entity.to_graph_node(&[]).unwrap();
        assert_eq!(node.label(), label);
        assert!(node.property("id").is_none());
        assert!(node.name().is_some(), "{label} has no name");
    }
}

#[test]
fn renormalizing_mints_new_identity_with_same_content() {
    let entity = DomainEntity::from(Work::new("The Art of War"));
    let first = entity.to_graph_node(&[]).unwrap();
    let second = entity.to_graph_node(&[]).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.properties(), second.properties());
}

#[test]
fn one_record_backs_many_nodes() {
    let record = ProvenanceRecord::shared("plugin_a", "table_b", "row_1").unwrap();
    let a = normalize(Person::new("Sun Tzu"), &[record.clone()]).unwrap();
    let b = normalize(Work::new("The Art of War"), &[record.clone()]).unwrap();

    assert!(std::sync::Arc::ptr_eq(&a.sources()[0], &b.sources()[0]));
}

#[test]
fn required_fields_are_enforced() {
    let failures: Vec<DomainEntity> = vec![
        Person::new("").into(),
        Work::new(" ").into(),
        Concept::new("").into(),
        Quote::new("").into(),
        Document::new("").into(),
        Segment::new(0, "").into(),
        Segment::new(0, "text").with_role("").into(),
    ];
    for entity in failures {
        let kind = entity.kind();
        match entity.to_graph_node(&[]) {
            Err(GraphError::Validation { entity, .. }) => assert_eq!(entity, kind.label()),
            other => panic!("{kind}: expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn registries_expose_their_tags() {
    assert!(KNOWLEDGE.all_tags().contains(&knowledge::AUTHORED));
    assert!(KNOWLEDGE.all_tags().contains(&knowledge::DISCUSSES));
    for tag in [structure::PART_OF, structure::NEXT, structure::STARTS_WITH] {
        assert!(STRUCTURE.all_tags().contains(&tag));
    }
}

#[test]
fn anonymous_provenance_aborts_normalization() {
    let record = std::sync::Arc::new(ProvenanceRecord {
        plugin_name: String::new(),
        source_table: "table_b".into(),
        source_locator: "row_1".into(),
    });
    let err = normalize(Person::new("Sun Tzu"), &[record]).unwrap_err();
    assert!(matches!(err, GraphError::Validation { .. }));
}
