pub mod edge;
pub mod node;

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;

use edge::ImportEdge;
use node::{ExternalInfo, FileInfo, GraphNode, NodeKey};

/// The in-memory dependency graph: a directed petgraph StableGraph with an
/// O(1) key index.
///
/// Built in a single pass per scan — file nodes first, then edges — and never
/// mutated afterwards. Cycles are legal and preserved; nothing detects or
/// suppresses them.
#[derive(Debug)]
pub struct DependencyGraph {
    /// The underlying directed graph.
    pub graph: StableGraph<GraphNode, ImportEdge, Directed>,
    /// Maps node keys to their indices for O(1) lookup.
    key_index: HashMap<NodeKey, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty dependency graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            key_index: HashMap::new(),
        }
    }

    /// Add a scanned source file node. Returns the new node's index, or the
    /// existing index if the path was already added.
    pub fn add_file(&mut self, path: PathBuf, extension: String) -> NodeIndex {
        let key = NodeKey::File(path.clone());
        if let Some(&existing) = self.key_index.get(&key) {
            return existing;
        }
        let idx = self
            .graph
            .add_node(GraphNode::File(FileInfo { path, extension }));
        self.key_index.insert(key, idx);
        idx
    }

    /// Add (or reuse) the node for an external specifier. The first reference
    /// creates the node; later references to the same value reuse it.
    pub fn ensure_external(&mut self, specifier: &str) -> NodeIndex {
        let key = NodeKey::External(specifier.to_string());
        if let Some(&existing) = self.key_index.get(&key) {
            return existing;
        }
        let idx = self.graph.add_node(GraphNode::External(ExternalInfo {
            specifier: specifier.to_string(),
        }));
        self.key_index.insert(key, idx);
        idx
    }

    /// Join a resolved internal target path to a node.
    ///
    /// The resolver emits paths exactly as written (`./b` → `.../b`), so the
    /// target is matched against already-added nodes: first the exact path,
    /// then the path with each candidate extension appended (`.../b.js`,
    /// `.../b.jsx`, ...). `extensions` must be in deterministic order — the
    /// first candidate that names a scanned file wins. A target nothing
    /// matches becomes an `UnmatchedTarget` node so its incoming edges still
    /// count. All lookups are against the scan's own index, never the disk.
    pub fn ensure_internal_target(
        &mut self,
        path: PathBuf,
        extensions: &[String],
    ) -> NodeIndex {
        if let Some(&existing) = self.key_index.get(&NodeKey::File(path.clone())) {
            return existing;
        }

        for ext in extensions {
            let candidate = append_extension(&path, ext);
            if let Some(&existing) = self.key_index.get(&NodeKey::File(candidate)) {
                return existing;
            }
        }

        let key = NodeKey::File(path.clone());
        let idx = self.graph.add_node(GraphNode::UnmatchedTarget { path });
        self.key_index.insert(key, idx);
        idx
    }

    /// Add one import edge. Duplicate edges between the same pair are kept.
    pub fn add_import(&mut self, from: NodeIndex, to: NodeIndex, specifier: String) {
        self.graph.add_edge(from, to, ImportEdge { specifier });
    }

    /// Outgoing edges of a node in insertion order (petgraph iterates
    /// adjacency most-recent-first, so the collected list is reversed).
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut targets: Vec<NodeIndex> = self.graph.edges(idx).map(|e| e.target()).collect();
        targets.reverse();
        targets
    }

    /// Look up a node index by key.
    pub fn get(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.key_index.get(key).copied()
    }

    /// All node indices with their keys.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.graph.node_indices().map(|idx| (idx, &self.graph[idx]))
    }

    /// Number of scanned file nodes.
    pub fn file_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&i| matches!(self.graph[i], GraphNode::File(_)))
            .count()
    }

    /// Number of external nodes.
    pub fn external_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&i| matches!(self.graph[i], GraphNode::External(_)))
            .count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `.ext` to a path's final component without replacing an existing
/// "extension" — `b.util` + `js` must become `b.util.js`, not `b.js`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut joined = OsString::from(path.as_os_str());
    joined.push(".");
    joined.push(ext);
    PathBuf::from(joined)
}
