//! Graph module for friendship modeling.
//!
//! This module provides the [`FriendGraph`] struct: an index-addressed set
//! of people with symmetric friendship edges and a case-insensitive name
//! index.
//!
//! # Example
//!
//! ```rust
//! use friendgraph::graph::FriendGraph;
//!
//! let mut graph = FriendGraph::new();
//! graph.add_person("sam", Some("rutgers")).unwrap();
//! graph.add_person("jane", Some("rutgers")).unwrap();
//! graph.add_friendship("sam", "jane").unwrap();
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.friendship_count(), 1);
//! ```

mod friend_graph;

pub(crate) use friend_graph::FriendWalk;
pub use friend_graph::{
    normalize_name, FriendGraph, GraphError, GraphResult, GraphSummary, Person,
};
