//! Structural queries over a [`FriendGraph`](crate::graph::FriendGraph).
//!
//! Three independent, read-only queries:
//!
//! - [`shortest_chain`] - the shortest friendship chain between two people
//! - [`cliques`] - same-school groups connected through same-school friends
//! - [`connectors`] - people whose removal would disconnect others
//!
//! Each call allocates only its own traversal state, so the same graph can
//! be queried from several threads at once.
//!
//! # Example
//!
//! ```rust
//! use friendgraph::analysis::{cliques, connectors, shortest_chain};
//! use friendgraph::graph::FriendGraph;
//!
//! let mut graph = FriendGraph::new();
//! graph.add_person("a", Some("x")).unwrap();
//! graph.add_person("b", Some("x")).unwrap();
//! graph.add_person("c", Some("y")).unwrap();
//! graph.add_friendship("a", "b").unwrap();
//! graph.add_friendship("b", "c").unwrap();
//!
//! assert_eq!(shortest_chain(&graph, "a", "c").unwrap().unwrap().hops(), 2);
//! assert_eq!(cliques(&graph, "x").unwrap().len(), 1);
//! assert_eq!(connectors(&graph), vec!["b"]);
//! ```

mod chain;
mod clique;
mod connector;
mod error;
mod traversal;

pub use chain::{shortest_chain, Chain};
pub use clique::{cliques, Clique};
pub use connector::connectors;
pub use error::{OutcomeKind, QueryError, QueryResult};
