use std::fs;

use pathway_annotator::annotation::{ExportNode, Qualifier};
use pathway_annotator::builder::Annotator;
use pathway_annotator::domain::{
    CatalystActivity, OntologyTerm, Pathway, ReactionLikeEvent, StableId,
};

fn load<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let raw = fs::read_to_string(format!("tests/fixtures/{name}")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn uris(node: &ExportNode, qualifier: Qualifier) -> Vec<String> {
    node.terms_for(qualifier)
        .flat_map(|term| term.resources.iter().map(|uri| uri.to_string()))
        .collect()
}

#[test]
fn go_fallback_uses_first_catalyst_only() {
    let reaction: ReactionLikeEvent = load("reaction_catalysts.json");
    let mut node = ExportNode::new("reaction_70171");
    Annotator::default().annotate_reaction(&reaction, &mut node);

    let is = uris(&node, Qualifier::Is);
    assert!(!is.iter().any(|uri| uri.contains("/go/")));
    assert_eq!(
        is,
        vec![
            "http://identifiers.org/reactome/REACTOME:R-HSA-70171",
            "http://identifiers.org/ec-code/EC-CODE:2.7.1.1",
            "http://identifiers.org/ec-code/EC-CODE:2.7.1.2",
        ]
    );
    assert_eq!(
        uris(&node, Qualifier::IsDescribedBy),
        vec!["http://identifiers.org/pubmed/PUBMED:8521811"]
    );
    assert_eq!(
        uris(&node, Qualifier::OccursIn),
        vec!["http://identifiers.org/doid/DOID:9352"]
    );
}

#[test]
fn go_fallback_takes_first_catalyst_function() {
    let reaction = ReactionLikeEvent {
        st_id: StableId::from("R-HSA-5"),
        catalyst_activity: vec![
            CatalystActivity {
                activity: Some(OntologyTerm::new("0004340")),
                ec_number: None,
            },
            CatalystActivity {
                activity: Some(OntologyTerm::new("0008865")),
                ec_number: None,
            },
        ],
        ..ReactionLikeEvent::default()
    };
    let mut node = ExportNode::new("reaction_5");
    Annotator::default().annotate_reaction(&reaction, &mut node);

    assert_eq!(
        uris(&node, Qualifier::Is),
        vec![
            "http://identifiers.org/reactome/REACTOME:R-HSA-5",
            "http://identifiers.org/go/GO:0004340",
        ]
    );
}

#[test]
fn pathway_annotations() {
    let pathway: Pathway = load("pathway_with_events.json");
    let mut node = ExportNode::new("pathway_167168");
    Annotator::default().annotate_pathway(&pathway, &mut node);

    assert_eq!(
        uris(&node, Qualifier::Is),
        vec![
            "http://identifiers.org/reactome/REACTOME:R-HSA-167168",
            "http://identifiers.org/go/GO:0006353",
        ]
    );
    assert!(uris(&node, Qualifier::IsDescribedBy).is_empty());
    assert_eq!(
        uris(&node, Qualifier::OccursIn),
        vec!["http://identifiers.org/doid/DOID:526"]
    );
    assert_eq!(
        uris(&node, Qualifier::HasInstance),
        vec!["http://identifiers.org/biomodels/BIOMODELS:BIOMD0000000001"]
    );
}

#[test]
fn sub_event_publications_only() {
    let pathway: Pathway = load("pathway_with_events.json");
    let mut node = ExportNode::new("pathway_167168");
    let report = Annotator::default().annotate_event_publications(&pathway.has_event, &mut node);

    assert_eq!(node.terms.len(), 1);
    assert_eq!(report.resource_count(), 2);
    assert_eq!(
        uris(&node, Qualifier::IsDescribedBy),
        vec![
            "http://identifiers.org/pubmed/PUBMED:1111",
            "http://identifiers.org/pubmed/PUBMED:2222",
        ]
    );
}

#[test]
fn terms_are_appended_to_existing_node_terms() {
    let pathway: Pathway = load("pathway_with_events.json");
    let annotator = Annotator::default();
    let mut node = ExportNode::new("pathway_167168");
    annotator.annotate_pathway(&pathway, &mut node);
    let before = node.terms.len();
    annotator.annotate_event_publications(&pathway.has_event, &mut node);

    assert_eq!(node.terms.len(), before + 1);
    assert_eq!(node.terms_for(Qualifier::Is).count(), 1);
}
