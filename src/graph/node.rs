use std::path::PathBuf;

/// Prefix distinguishing external node keys from file paths in serialized
/// output, so a package named like an absolute path can never collide with a
/// real file key.
pub const EXTERNAL_KEY_PREFIX: &str = "ext:";

/// Unique identity of a graph node: either a canonical absolute file path or
/// an external specifier. One logical entity never has both forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Canonical absolute path of a file inside (or referenced from) the tree.
    File(PathBuf),
    /// External dependency, identified by its specifier string alone.
    External(String),
}

impl NodeKey {
    /// The string form used in serialized output: the path itself for files,
    /// `ext:<specifier>` for externals.
    pub fn export_key(&self) -> String {
        match self {
            Self::File(path) => path.to_string_lossy().into_owned(),
            Self::External(spec) => format!("{EXTERNAL_KEY_PREFIX}{spec}"),
        }
    }
}

/// Metadata about a source file discovered by the walker.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileInfo {
    /// Canonical absolute path to the file.
    pub path: PathBuf,
    /// Lowercased file extension, one of the configured allow-list.
    pub extension: String,
}

/// Metadata about an external dependency (bare or absolute specifier).
/// External nodes are terminal — nothing is scanned behind them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExternalInfo {
    /// The specifier exactly as written in source (e.g. "react", "@org/utils").
    pub specifier: String,
}

/// A node in the dependency graph.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum GraphNode {
    /// A source file that the walker discovered and the scan read.
    File(FileInfo),
    /// A resolved internal path that no scanned file matches (outside the
    /// root, filtered out, or nonexistent). Participates in incoming counts
    /// but is not exported as a first-class node.
    UnmatchedTarget { path: PathBuf },
    /// An external dependency, keyed by its specifier.
    External(ExternalInfo),
}

impl GraphNode {
    /// The identity key for this node.
    pub fn key(&self) -> NodeKey {
        match self {
            Self::File(info) => NodeKey::File(info.path.clone()),
            Self::UnmatchedTarget { path } => NodeKey::File(path.clone()),
            Self::External(info) => NodeKey::External(info.specifier.clone()),
        }
    }

    /// True for nodes that appear as first-class keys in serialized output:
    /// scanned files and externals, but not unmatched targets.
    pub fn is_exported(&self) -> bool {
        !matches!(self, Self::UnmatchedTarget { .. })
    }
}
