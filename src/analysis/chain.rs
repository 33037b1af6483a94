//! Shortest friendship chain between two people.

use serde::Serialize;
use std::ops::ControlFlow;

use super::error::QueryResult;
use super::traversal::{breadth_first, require_name, resolve, unwind_path};
use crate::graph::FriendGraph;

/// A sequence of people where each consecutive pair are friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    /// Canonical names from the first person to the last
    pub names: Vec<String>,
}

impl Chain {
    /// Creates a chain from canonical names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Returns the number of friendships crossed.
    pub fn hops(&self) -> usize {
        self.names.len().saturating_sub(1)
    }

    /// Returns a formatted string representation of the chain.
    ///
    /// For example: "sam -> jane -> sergei"
    pub fn path(&self) -> String {
        self.names.join(" -> ")
    }

    /// Returns the number of people in the chain.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the chain is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Finds the shortest chain of friends from `from` to `to`.
///
/// Names are matched case-insensitively. When several shortest chains
/// exist, the one found first by exploring friend lists in stored order
/// wins. Stored order is most recent friendship first, so of two equally
/// short routes the one through the newer friend is returned.
///
/// # Returns
///
/// * `Ok(Some(chain))` - the shortest chain, including both endpoints
/// * `Ok(None)` - both people exist but are not connected
/// * `Err(QueryError::InvalidInput)` - a name is empty
/// * `Err(QueryError::PersonNotFound)` - a name matches nobody
///
/// # Example
///
/// ```rust
/// use friendgraph::analysis::shortest_chain;
/// use friendgraph::graph::FriendGraph;
///
/// let mut graph = FriendGraph::new();
/// for name in ["a", "b", "c"] {
///     graph.add_person(name, None).unwrap();
/// }
/// graph.add_friendship("a", "b").unwrap();
/// graph.add_friendship("b", "c").unwrap();
///
/// let chain = shortest_chain(&graph, "A", "c").unwrap().unwrap();
/// assert_eq!(chain.path(), "a -> b -> c");
/// ```
pub fn shortest_chain(graph: &FriendGraph, from: &str, to: &str) -> QueryResult<Option<Chain>> {
    let from = require_name("first person", from)?;
    let to = require_name("second person", to)?;
    let source = resolve(graph, &from)?;
    let target = resolve(graph, &to)?;

    if source == target {
        return Ok(Some(Chain::new(vec![graph.name(source).to_string()])));
    }

    let mut visited = vec![false; graph.len()];
    let mut predecessors: Vec<Option<usize>> = vec![None; graph.len()];

    breadth_first(graph, source, &mut visited, |_| true, |parent, friend| {
        predecessors[friend] = Some(parent);
        if friend == target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    if !visited[target] {
        tracing::debug!(from = %from, to = %to, "no chain: people are not connected");
        return Ok(None);
    }

    let names: Vec<String> = unwind_path(&predecessors, target)
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect();

    tracing::debug!(from = %from, to = %to, hops = names.len() - 1, "found chain");
    Ok(Some(Chain::new(names)))
}
