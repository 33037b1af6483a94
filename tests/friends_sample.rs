//! End-to-end tests: parse a friends file, build the graph, run queries
//! and render reports.

use std::io::Write;

use friendgraph::analysis::{cliques, connectors, shortest_chain, OutcomeKind, QueryError};
use friendgraph::export::{export_to_string, ExportData, ExportFormat, QueryReport};
use friendgraph::graph::FriendGraph;
use friendgraph::parser::{parse_file, parse_str, validate};

const SAMPLE: &str = "\
15
Sam|y|Rutgers
Jane|y|Rutgers
Michele|y|Cornell
Sergei|y|Rutgers
Ricardo|y|Penn State
Kaitlin|n
Samir|n
Aparna|y|Rutgers
Ming|y|Rutgers
Nick|y|Rutgers
Bob|y|Rutgers
Heather|y|Penn State
Tom|y|Penn State
Vinay|y|Cornell
Jim|y|Penn State
sam|jane
jane|bob
jane|kaitlin
kaitlin|samir
sergei|aparna
samir|aparna
aparna|ming
ming|nick
aparna|ricardo
jim|ricardo
ricardo|heather
ricardo|tom
tom|jim
michele|vinay
";

fn sample_graph() -> FriendGraph {
    let file = parse_str(SAMPLE).unwrap();
    validate(&file).unwrap();
    FriendGraph::from_friends_file(&file).unwrap()
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn sample_loads() {
    let graph = sample_graph();
    let summary = graph.summary();

    assert_eq!(summary.people, 15);
    assert_eq!(summary.friendships, 14);
    assert_eq!(summary.students, 13);
    assert_eq!(summary.schools, vec!["cornell", "penn state", "rutgers"]);
    assert_eq!(summary.isolated, 0);
}

#[test]
fn sample_shortest_chain() {
    let graph = sample_graph();

    let chain = shortest_chain(&graph, "Sam", "Aparna").unwrap().unwrap();
    assert_eq!(
        chain.names,
        vec!["sam", "jane", "kaitlin", "samir", "aparna"]
    );

    let chain = shortest_chain(&graph, "nick", "TOM").unwrap().unwrap();
    assert_eq!(chain.path(), "nick -> ming -> aparna -> ricardo -> tom");
}

#[test]
fn sample_unreachable_and_missing() {
    let graph = sample_graph();

    assert_eq!(shortest_chain(&graph, "sam", "vinay").unwrap(), None);
    assert_eq!(
        shortest_chain(&graph, "sam", "nobody"),
        Err(QueryError::PersonNotFound("nobody".to_string()))
    );
}

#[test]
fn sample_cliques() {
    let graph = sample_graph();

    let rutgers: Vec<Vec<String>> = cliques(&graph, "rutgers")
        .unwrap()
        .into_iter()
        .map(|c| sorted(c.members))
        .collect();
    assert_eq!(
        rutgers,
        vec![
            vec!["bob", "jane", "sam"],
            vec!["aparna", "ming", "nick", "sergei"],
        ]
    );

    let penn_state = cliques(&graph, "Penn State").unwrap();
    assert_eq!(penn_state.len(), 1);
    assert_eq!(
        sorted(penn_state[0].members.clone()),
        vec!["heather", "jim", "ricardo", "tom"]
    );

    assert!(cliques(&graph, "princeton").unwrap().is_empty());
}

#[test]
fn sample_connectors() {
    let graph = sample_graph();

    assert_eq!(
        sorted(connectors(&graph)),
        vec!["aparna", "jane", "kaitlin", "ming", "ricardo", "samir"]
    );
}

#[test]
fn sample_reports() {
    let graph = sample_graph();
    let report = QueryReport::Chain {
        from: "sam".to_string(),
        to: "vinay".to_string(),
        chain: shortest_chain(&graph, "sam", "vinay").unwrap(),
    };
    assert_eq!(report.outcome(), OutcomeKind::Unreachable);

    let data = ExportData::new(&graph, report);
    let json = export_to_string(ExportFormat::Json, &data).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["outcome"], "unreachable");
    assert_eq!(parsed["graph"]["people"], 15);
}

#[test]
fn sample_from_disk() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(SAMPLE.as_bytes()).unwrap();

    let file = parse_file(tmp.path()).unwrap();
    let graph = FriendGraph::from_friends_file(&file).unwrap();
    assert_eq!(graph.len(), 15);
}
