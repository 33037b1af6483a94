//! Connectors: people whose removal would split the friendship network.
//!
//! This is articulation-point detection with discovery numbers and
//! low-link values. The depth-first search runs on an explicit stack so
//! long friendship chains cannot overflow the call stack. Each stack frame
//! owns a detached cursor into its person's friend list, which lets a
//! frame resume exactly where it left off after a child finishes, the same
//! as a recursive call would.

use crate::graph::{FriendGraph, FriendWalk};

/// A person is never a connector with fewer friends than this.
const MIN_CONNECTOR_DEGREE: usize = 2;

/// One active vertex of the depth-first search.
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    friends: FriendWalk,
}

/// Per-query depth-first search state.
struct LowLink<'g> {
    graph: &'g FriendGraph,
    /// Discovery number per person, 0 while undiscovered
    discovery: Vec<usize>,
    /// Smallest discovery number reachable from the subtree via one back edge
    low: Vec<usize>,
    is_cut: Vec<bool>,
    counter: usize,
}

impl<'g> LowLink<'g> {
    fn new(graph: &'g FriendGraph) -> Self {
        let n = graph.len();
        Self {
            graph,
            discovery: vec![0; n],
            low: vec![0; n],
            is_cut: vec![false; n],
            counter: 0,
        }
    }

    fn discovered(&self, vertex: usize) -> bool {
        self.discovery[vertex] != 0
    }

    fn discover(&mut self, vertex: usize, parent: Option<usize>) -> Frame {
        self.counter += 1;
        self.discovery[vertex] = self.counter;
        self.low[vertex] = self.counter;
        Frame {
            vertex,
            parent,
            friends: self.graph.walk_friends(vertex),
        }
    }

    /// Searches the component containing `root`.
    fn search(&mut self, root: usize) {
        let mut root_children = 0;
        let mut stack = vec![self.discover(root, None)];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let parent = frame.parent;

            match frame.friends.next(self.graph) {
                Some(friend) if !self.discovered(friend) => {
                    if vertex == root {
                        root_children += 1;
                    }
                    let child = self.discover(friend, Some(vertex));
                    stack.push(child);
                }
                Some(friend) => {
                    // Back edge; the tree edge to the parent does not count.
                    if Some(friend) != parent {
                        self.low[vertex] = self.low[vertex].min(self.discovery[friend]);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(parent) = parent {
                        self.low[parent] = self.low[parent].min(self.low[vertex]);
                        if parent != root && self.low[vertex] >= self.discovery[parent] {
                            self.is_cut[parent] = true;
                        }
                    }
                }
            }
        }

        if root_children >= 2 {
            self.is_cut[root] = true;
        }
    }
}

/// Finds every connector in the graph.
///
/// A connector is a person whose removal increases the number of
/// connected components. Every component is searched, and people with
/// zero or one friend are never reported.
///
/// The result holds each connector once, in person index order. Callers
/// should treat it as a set.
///
/// # Example
///
/// ```rust
/// use friendgraph::analysis::connectors;
/// use friendgraph::graph::FriendGraph;
///
/// let mut graph = FriendGraph::new();
/// for name in ["a", "b", "c", "d"] {
///     graph.add_person(name, None).unwrap();
/// }
/// graph.add_friendship("a", "b").unwrap();
/// graph.add_friendship("b", "c").unwrap();
/// graph.add_friendship("c", "d").unwrap();
///
/// assert_eq!(connectors(&graph), vec!["b", "c"]);
/// ```
pub fn connectors(graph: &FriendGraph) -> Vec<String> {
    let mut state = LowLink::new(graph);
    let mut components = 0;

    for root in 0..graph.len() {
        if !state.discovered(root) {
            components += 1;
            state.search(root);
        }
    }

    let found: Vec<String> = state
        .is_cut
        .iter()
        .enumerate()
        .filter(|&(index, &cut)| cut && graph.degree(index) >= MIN_CONNECTOR_DEGREE)
        .map(|(index, _)| graph.name(index).to_string())
        .collect();

    tracing::debug!(components, connectors = found.len(), "found connectors");
    found
}
