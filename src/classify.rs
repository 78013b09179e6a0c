use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::visit::IntoEdgeReferences;

use crate::graph::DependencyGraph;
use crate::graph::node::GraphNode;

/// The derived role of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Internal node with at least one incoming edge. Self-loops count.
    Used,
    /// Internal node with zero incoming edges.
    Unused,
    /// External dependency node.
    External,
}

/// Count incoming edges for every node in the graph.
///
/// Two passes, O(V + E): zero-initialize every known node, then walk all
/// edges incrementing each target. Recomputed fresh per scan — never cached
/// or updated incrementally.
pub fn incoming_counts(graph: &DependencyGraph) -> HashMap<NodeIndex, usize> {
    let mut counts: HashMap<NodeIndex, usize> = graph
        .graph
        .node_indices()
        .map(|idx| (idx, 0usize))
        .collect();

    for edge in graph.graph.edge_references() {
        *counts.entry(edge.target()).or_insert(0) += 1;
    }

    counts
}

/// Derive every node's role from the sealed graph.
///
/// A node is `external` iff it is external-tagged; otherwise `unused` iff its
/// incoming count is exactly zero, else `used`.
pub fn classify(graph: &DependencyGraph) -> HashMap<NodeIndex, Role> {
    let counts = incoming_counts(graph);

    graph
        .nodes()
        .map(|(idx, node)| {
            let role = match node {
                GraphNode::External(_) => Role::External,
                _ if counts.get(&idx).copied().unwrap_or(0) == 0 => Role::Unused,
                _ => Role::Used,
            };
            (idx, role)
        })
        .collect()
}

/// Scanned files with zero incoming edges, sorted for deterministic output.
///
/// Unmatched targets and externals are never listed — only files the walker
/// actually discovered.
pub fn unused_files(graph: &DependencyGraph) -> Vec<std::path::PathBuf> {
    let roles = classify(graph);
    let mut files: Vec<std::path::PathBuf> = graph
        .nodes()
        .filter_map(|(idx, node)| match node {
            GraphNode::File(info) if roles.get(&idx) == Some(&Role::Unused) => {
                Some(info.path.clone())
            }
            _ => None,
        })
        .collect();
    files.sort();
    files
}
