//! friendgraph - friendship graph analyzer
//!
//! This crate reads a friendship network and answers three structural
//! questions about it: the shortest chain of friends between two people,
//! the same-school cliques, and the connectors whose removal would split
//! the network.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
