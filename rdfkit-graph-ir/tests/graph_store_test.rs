//! Graph and GraphStore behaviour as seen by store clients

use pretty_assertions::assert_eq;
use rdfkit_graph_ir::{make_literal, Datatype, Graph, GraphStore, Term, Triple};

const NAME: &str = "http://xmlns.com/foaf/0.1/name";
const AGE: &str = "http://xmlns.com/foaf/0.1/age";

fn people() -> Graph {
    let mut graph = Graph::new();
    let alice = graph.create_resource("http://example.org/alice");
    let bob = graph.create_resource("http://example.org/bob");
    graph
        .add_triples(vec![
            Triple::new(alice.clone(), Term::iri(NAME), make_literal("Alice")),
            Triple::new(alice, Term::iri(AGE), make_literal(30)),
            Triple::new(bob.clone(), Term::iri(NAME), make_literal("Bob")),
            Triple::new(bob, Term::iri(AGE), make_literal(30_i64)),
        ])
        .unwrap();
    graph
}

#[test]
fn test_bulk_insert_preserves_order() {
    let graph = people();
    let rendered: Vec<String> = graph.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" .",
            "<http://example.org/alice> <http://xmlns.com/foaf/0.1/age> \"30\"^^<http://www.w3.org/2001/XMLSchema#integer> .",
            "<http://example.org/bob> <http://xmlns.com/foaf/0.1/name> \"Bob\" .",
            "<http://example.org/bob> <http://xmlns.com/foaf/0.1/age> \"30\"^^<http://www.w3.org/2001/XMLSchema#integer> .",
        ]
    );
}

#[test]
fn test_predicate_lookups_are_distinct_sets() {
    let graph = people();

    let subjects: Vec<&str> = graph
        .subjects_with_predicate(AGE)
        .into_iter()
        .filter_map(|t| t.as_iri())
        .collect();
    assert_eq!(subjects, vec!["http://example.org/alice", "http://example.org/bob"]);

    // 30_i32 and 30_i64 are the same literal
    let ages = graph.objects_of_predicate(AGE);
    assert_eq!(ages.len(), 1);
    let (value, datatype) = ages.into_iter().next().unwrap().as_literal().unwrap();
    assert_eq!(value.as_integer(), Some(30));
    assert_eq!(datatype, &Datatype::from_iri("http://www.w3.org/2001/XMLSchema#integer"));

    assert!(graph.objects_of_predicate("http://example.org/unused").is_empty());
}

#[test]
fn test_resources_tracked_separately_from_statements() {
    let mut graph = Graph::new();
    graph.create_resource("http://example.org/carol");
    graph.create_resource("http://example.org/carol");

    assert!(graph.is_empty());
    assert_eq!(graph.resources().collect::<Vec<_>>(), vec!["http://example.org/carol"]);
    assert!(graph.contains_resource("http://example.org/carol"));
    assert!(!graph.contains_resource("http://example.org/dave"));
}

#[test]
fn test_duplicates_kept_until_dedupe() {
    let mut graph = people();
    let first = graph.triples()[0].clone();
    graph.add(first.clone());
    assert_eq!(graph.len(), 5);

    graph.dedupe();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.triples()[0], first);
}

#[test]
fn test_integer_width_collapses_to_one_object() {
    let mut graph = Graph::new();
    let s = Term::iri("http://example.org/dog");
    let p = Term::iri("http://example.org/legs");
    graph.add_triple(s.clone(), p.clone(), make_literal(4_u8));
    graph.add_triple(s.clone(), p.clone(), make_literal(4_u32));
    graph.add_triple(s, p, Term::integer(4));

    let objects = graph.objects_of_predicate("http://example.org/legs");
    assert_eq!(objects.into_iter().collect::<Vec<_>>(), vec![&Term::integer(4)]);
    assert_eq!(graph.dedupe(), 2);
}
