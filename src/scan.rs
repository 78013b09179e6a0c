use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extract::{RawSpecifier, SpecifierKind, extract_specifiers};
use crate::graph::DependencyGraph;
use crate::resolver::{Target, resolve};
use crate::walker::walk_tree;

/// Aggregate statistics for one scan.
#[derive(Debug, Serialize)]
pub struct ScanStats {
    /// Files scanned into the graph (readable, allowed extension).
    pub file_count: usize,
    /// Specifiers captured by the static-import pattern family.
    pub import_specifiers: usize,
    /// Specifiers captured by the require pattern family.
    pub require_specifiers: usize,
    /// Edges whose target is an internal path.
    pub internal_edges: usize,
    /// Edges whose target is an external specifier.
    pub external_edges: usize,
    /// Distinct external dependencies.
    pub external_packages: usize,
    /// Internal targets no scanned file matched.
    pub unmatched_targets: usize,
    /// Files skipped because their contents could not be read.
    pub skipped: usize,
    /// Wall-clock time for the scan in seconds.
    pub elapsed_secs: f64,
}

/// The sealed result of one scan: the finished graph plus its statistics.
#[derive(Debug)]
pub struct ScanResult {
    pub graph: DependencyGraph,
    pub stats: ScanStats,
}

/// Run one scan from end to end: walk the tree, extract and resolve every
/// specifier, and assemble the dependency graph.
///
/// One synchronous blocking pass with nothing shared — concurrent scans each
/// call this with their own config and never interfere. Only root-level
/// failures return `Err`; unreadable files are skipped with a warning and the
/// scan completes. No partial graph is ever returned.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    let started = Instant::now();

    let files = walk_tree(root, config)?;

    // Read and extract everything before building edges, so every internal
    // target can be joined against the complete scanned-file set.
    let mut skipped = 0usize;
    let mut extracted: Vec<(PathBuf, String, Vec<RawSpecifier>)> = Vec::new();
    for path in files {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("warning: skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let specifiers = extract_specifiers(&text);
        extracted.push((path, extension, specifiers));
    }

    let mut graph = DependencyGraph::new();
    let mut sources = Vec::with_capacity(extracted.len());
    for (path, extension, specifiers) in extracted {
        let idx = graph.add_file(path.clone(), extension);
        sources.push((idx, path, specifiers));
    }

    let extensions = config.sorted_extensions();
    let mut import_specifiers = 0usize;
    let mut require_specifiers = 0usize;
    let mut internal_edges = 0usize;
    let mut external_edges = 0usize;

    for (from, path, specifiers) in sources {
        for spec in specifiers {
            match spec.kind {
                SpecifierKind::Import => import_specifiers += 1,
                SpecifierKind::Require => require_specifiers += 1,
            }

            let to = match resolve(&spec.value, &path) {
                Target::Internal(target) => {
                    internal_edges += 1;
                    graph.ensure_internal_target(target, &extensions)
                }
                Target::External(specifier) => {
                    external_edges += 1;
                    graph.ensure_external(&specifier)
                }
            };
            graph.add_import(from, to, spec.value);
        }
    }

    let unmatched_targets = graph
        .nodes()
        .filter(|(_, node)| !node.is_exported())
        .count();

    let stats = ScanStats {
        file_count: graph.file_count(),
        import_specifiers,
        require_specifiers,
        internal_edges,
        external_edges,
        external_packages: graph.external_count(),
        unmatched_targets,
        skipped,
        elapsed_secs: started.elapsed().as_secs_f64(),
    };

    Ok(ScanResult { graph, stats })
}
