//! School cliques: groups of students linked by same-school friendships.

use serde::Serialize;
use std::ops::ControlFlow;

use super::error::QueryResult;
use super::traversal::{breadth_first, require_name};
use crate::graph::FriendGraph;

/// Students of one school who can reach each other through friendships
/// that never leave the school.
///
/// This is a connected component of the school's subgraph, not a complete
/// subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clique {
    /// Canonical names in breadth-first visitation order
    pub members: Vec<String>,
}

impl Clique {
    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the clique has no members (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if `name` (canonical) is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

/// Partitions the students of `school` into cliques.
///
/// Every student of the school lands in exactly one clique. Cliques are
/// ordered by the index of their first member; members follow
/// breadth-first order from that person, walking friend lists in stored
/// order and only stepping onto students of the same school.
///
/// An unknown school is not an error: the result is simply empty.
///
/// # Example
///
/// ```rust
/// use friendgraph::analysis::cliques;
/// use friendgraph::graph::FriendGraph;
///
/// let mut graph = FriendGraph::new();
/// graph.add_person("a", Some("x")).unwrap();
/// graph.add_person("b", Some("x")).unwrap();
/// graph.add_person("c", Some("y")).unwrap();
/// graph.add_friendship("a", "b").unwrap();
/// graph.add_friendship("b", "c").unwrap();
///
/// let found = cliques(&graph, "X").unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].members, vec!["a", "b"]);
/// ```
pub fn cliques(graph: &FriendGraph, school: &str) -> QueryResult<Vec<Clique>> {
    let school = require_name("school", school)?;
    let attends = |index: usize| graph.person(index).is_some_and(|p| p.attends(&school));

    let mut visited = vec![false; graph.len()];
    let mut found = Vec::new();

    for (index, person) in graph.persons() {
        if visited[index] || !person.attends(&school) {
            continue;
        }

        let mut members = vec![person.name.clone()];
        breadth_first(graph, index, &mut visited, attends, |_, friend| {
            members.push(graph.name(friend).to_string());
            ControlFlow::Continue(())
        });
        found.push(Clique { members });
    }

    tracing::debug!(school = %school, cliques = found.len(), "found cliques");
    Ok(found)
}
