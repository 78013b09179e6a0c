/// A directed import edge: the source file imports the target node.
///
/// Edges are never deduplicated — a file importing the same target twice
/// carries two edges, in source-text order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ImportEdge {
    /// The raw specifier string as written in source (e.g. `"./utils"`, `"react"`).
    pub specifier: String,
}
