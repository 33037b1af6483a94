//! Friendship graph implementation using petgraph.
//!
//! People are stored as nodes of a directed graph. A friendship is
//! recorded as a pair of opposing edges, so every edge `a -> b` has a
//! matching `b -> a` and traversals only ever need the outgoing list.

use petgraph::graph::{DiGraph, NodeIndex, WalkNeighbors};
use petgraph::Direction;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::parser::FriendsFile;

/// Normalizes a person or school name for storage and lookup.
///
/// Names are compared case-insensitively everywhere, so this is applied
/// once when a name enters the graph and once on every lookup key.
///
/// # Example
///
/// ```rust
/// use friendgraph::graph::normalize_name;
///
/// assert_eq!(normalize_name("  Sam "), "sam");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Errors raised while building a [`FriendGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A person was added with an empty or whitespace-only name.
    #[error("person name must not be empty")]
    EmptyName,

    /// A person with the same normalized name already exists.
    #[error("person '{0}' already exists")]
    DuplicatePerson(String),

    /// A friendship referenced a name that is not in the graph.
    #[error("unknown person '{0}'")]
    UnknownPerson(String),

    /// A friendship connected a person to themselves.
    #[error("'{0}' cannot be friends with themselves")]
    SelfFriendship(String),
}

/// Result type alias for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;

/// A person in the friendship graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Canonical (normalized) name, unique within the graph
    pub name: String,
    /// Normalized school name, if the person attends one
    pub school: Option<String>,
}

impl Person {
    fn new(name: String, school: Option<String>) -> Self {
        Self { name, school }
    }

    /// Returns true if this person attends `school`.
    ///
    /// `school` must already be normalized.
    pub fn attends(&self, school: &str) -> bool {
        self.school.as_deref() == Some(school)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.school {
            Some(school) => write!(f, "{} ({})", self.name, school),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Aggregate counts describing a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Number of people
    pub people: usize,
    /// Number of (undirected) friendships
    pub friendships: usize,
    /// Number of people attending some school
    pub students: usize,
    /// Distinct schools, sorted
    pub schools: Vec<String>,
    /// Number of people without any friends
    pub isolated: usize,
}

/// An undirected friendship graph.
///
/// People get stable indices `0..n` in the order they are added, and a
/// case-insensitive name index maps names back to those indices. Friend
/// lists are kept in stored order: the most recently added friendship
/// comes first.
///
/// # Example
///
/// ```rust
/// use friendgraph::graph::FriendGraph;
///
/// let mut graph = FriendGraph::new();
/// graph.add_person("Sam", Some("Rutgers")).unwrap();
/// graph.add_person("Jane", None).unwrap();
/// graph.add_friendship("sam", "JANE").unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.friendship_count(), 1);
/// assert_eq!(graph.index_of("SAM"), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FriendGraph {
    /// Person nodes with one edge per direction of each friendship
    graph: DiGraph<Person, ()>,
    /// Maps normalized names to their node indices
    name_index: HashMap<String, NodeIndex>,
}

impl FriendGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `people` - Expected number of people
    /// * `friendships` - Expected number of friendships
    pub fn with_capacity(people: usize, friendships: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(people, friendships * 2),
            name_index: HashMap::with_capacity(people),
        }
    }

    /// Builds a graph from a parsed friends file.
    ///
    /// People are indexed in declaration order and friendships are added
    /// in declaration order. Repeated friendships are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use friendgraph::graph::FriendGraph;
    /// use friendgraph::parser::parse_str;
    ///
    /// let file = parse_str("2\nsam|y|rutgers\njane|n\nsam|jane\n").unwrap();
    /// let graph = FriendGraph::from_friends_file(&file).unwrap();
    ///
    /// assert_eq!(graph.degree(0), 1);
    /// ```
    pub fn from_friends_file(file: &FriendsFile) -> GraphResult<Self> {
        let mut graph = Self::with_capacity(file.person_count(), file.friendship_count());

        for person in &file.people {
            graph.add_person(&person.name, person.school.as_deref())?;
        }
        for friendship in &file.friendships {
            graph.add_friendship(&friendship.first, &friendship.second)?;
        }

        tracing::debug!(
            people = graph.len(),
            friendships = graph.friendship_count(),
            "built friend graph"
        );
        Ok(graph)
    }

    /// Adds a person and returns their index.
    ///
    /// The name and school are normalized. A blank school is treated as
    /// no school.
    pub fn add_person(&mut self, name: &str, school: Option<&str>) -> GraphResult<usize> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.name_index.contains_key(&name) {
            return Err(GraphError::DuplicatePerson(name));
        }

        let school = school.map(normalize_name).filter(|s| !s.is_empty());
        let idx = self.graph.add_node(Person::new(name.clone(), school));
        self.name_index.insert(name, idx);
        Ok(idx.index())
    }

    /// Records a friendship between two existing people.
    ///
    /// # Returns
    ///
    /// `true` if the friendship was added, `false` if the two were
    /// already friends.
    pub fn add_friendship(&mut self, first: &str, second: &str) -> GraphResult<bool> {
        let a = self.lookup(first)?;
        let b = self.lookup(second)?;

        if a == b {
            return Err(GraphError::SelfFriendship(self.graph[a].name.clone()));
        }
        if self.graph.contains_edge(a, b) {
            tracing::warn!(
                first = %self.graph[a].name,
                second = %self.graph[b].name,
                "skipping repeated friendship"
            );
            return Ok(false);
        }

        self.graph.add_edge(a, b, ());
        self.graph.add_edge(b, a, ());
        Ok(true)
    }

    fn lookup(&self, name: &str) -> GraphResult<NodeIndex> {
        let key = normalize_name(name);
        self.name_index
            .get(&key)
            .copied()
            .ok_or(GraphError::UnknownPerson(key))
    }

    /// Looks up a person's index by name, ignoring case.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_index
            .get(&normalize_name(name))
            .map(|idx| idx.index())
    }

    /// Gets a person by index.
    pub fn person(&self, index: usize) -> Option<&Person> {
        self.graph.node_weight(NodeIndex::new(index))
    }

    /// Returns the canonical name of the person at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn name(&self, index: usize) -> &str {
        &self.graph[NodeIndex::new(index)].name
    }

    /// Iterates over all people in index order.
    pub fn persons(&self) -> impl Iterator<Item = (usize, &Person)> {
        self.graph.node_weights().enumerate()
    }

    /// Iterates over the friends of `index` in stored order.
    ///
    /// Yields nothing for an out-of-range index.
    pub fn friends(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(index), Direction::Outgoing)
            .map(|idx| idx.index())
    }

    /// Returns a friend cursor that does not borrow the graph.
    ///
    /// Used by traversals that keep one cursor per stack frame.
    pub(crate) fn walk_friends(&self, index: usize) -> FriendWalk {
        FriendWalk(
            self.graph
                .neighbors_directed(NodeIndex::new(index), Direction::Outgoing)
                .detach(),
        )
    }

    /// Returns the number of friends of `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.friends(index).count()
    }

    /// Returns true if the two people are friends.
    pub fn are_friends(&self, first: usize, second: usize) -> bool {
        self.graph
            .contains_edge(NodeIndex::new(first), NodeIndex::new(second))
    }

    /// Returns the number of people.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if the graph has no people.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the number of friendships.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    /// Returns the distinct schools, sorted.
    pub fn schools(&self) -> Vec<&str> {
        self.graph
            .node_weights()
            .filter_map(|p| p.school.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Summarizes the graph.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            people: self.len(),
            friendships: self.friendship_count(),
            students: self
                .graph
                .node_weights()
                .filter(|p| p.school.is_some())
                .count(),
            schools: self.schools().into_iter().map(String::from).collect(),
            isolated: (0..self.len()).filter(|&i| self.degree(i) == 0).count(),
        }
    }
}

/// Detached cursor over one person's friends.
pub(crate) struct FriendWalk(WalkNeighbors<u32>);

impl FriendWalk {
    /// Advances to the next friend, in stored order.
    pub(crate) fn next(&mut self, graph: &FriendGraph) -> Option<usize> {
        self.0.next_node(&graph.graph).map(|idx| idx.index())
    }
}
