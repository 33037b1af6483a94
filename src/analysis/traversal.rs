//! Traversal helpers shared by the query components.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use super::error::{QueryError, QueryResult};
use crate::graph::{normalize_name, FriendGraph};

/// Normalizes a required name argument, rejecting blank input.
pub(crate) fn require_name(what: &str, value: &str) -> QueryResult<String> {
    let name = normalize_name(value);
    if name.is_empty() {
        return Err(QueryError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(name)
}

/// Resolves a normalized name to its person index.
pub(crate) fn resolve(graph: &FriendGraph, name: &str) -> QueryResult<usize> {
    graph
        .index_of(name)
        .ok_or_else(|| QueryError::PersonNotFound(name.to_string()))
}

/// Breadth-first search from `start`.
///
/// `start` is marked visited. Each friend that is unvisited and passes
/// `admit` is marked visited, reported to `discover` as
/// `(parent, friend)` and queued. Friends are explored in stored order.
/// Returning `ControlFlow::Break` from `discover` stops the search.
pub(crate) fn breadth_first<A, D>(
    graph: &FriendGraph,
    start: usize,
    visited: &mut [bool],
    mut admit: A,
    mut discover: D,
) where
    A: FnMut(usize) -> bool,
    D: FnMut(usize, usize) -> ControlFlow<()>,
{
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for friend in graph.friends(current) {
            if visited[friend] || !admit(friend) {
                continue;
            }
            visited[friend] = true;
            if discover(current, friend).is_break() {
                return;
            }
            queue.push_back(friend);
        }
    }
}

/// Follows predecessor links from `target` back to the root, returning
/// the indices in root-to-target order.
pub(crate) fn unwind_path(predecessors: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = predecessors[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
