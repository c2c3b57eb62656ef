use common::error::Error;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Ordered sequence of node references from a query's start node to its end node.
///
/// Paths borrow from the [`NodePool`] they were found in; copying a path copies
/// references, never nodes.
pub type Path<'a> = Vec<&'a Node>;

/// A uniquely named vertex.
///
/// `children` holds the names of the outgoing edge targets in insertion order,
/// which fixes the order in which searches visit them. Equality, hashing and
/// ordering only look at `name`.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    children: Vec<String>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the outgoing edge targets, in insertion order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|child| child == name)
    }

    pub(crate) fn push_child(&mut self, name: &str) {
        if !self.has_child(name) {
            self.children.push(name.to_string());
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Owner of every [`Node`] of a graph, keyed by name.
///
/// Nodes are stored in insertion order and indexed by name, so iteration is
/// deterministic and `lookup` is O(1). Adjacency is expressed with names that
/// resolve back into the pool.
#[derive(Debug, Clone, Default)]
pub struct NodePool {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a node up by name.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no node carries `name`.
    pub fn lookup(&self, name: &str) -> Result<&Node, Error> {
        self.index
            .get(name)
            .map(|&idx| &self.nodes[idx])
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Resolves the outgoing neighbours of `node` through the pool, in insertion order.
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = Result<&'a Node, Error>> {
        node.children.iter().map(move |name| self.lookup(name))
    }

    /// Inserts `name` if absent and returns its slot.
    pub(crate) fn insert(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }
}
