use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{Role, classify, incoming_counts};
use crate::scan::{ScanResult, ScanStats};

/// The serializable form of a sealed scan: the adjacency mapping plus the
/// derived convenience fields.
///
/// `graph` alone is sufficient for any consumer — roles and incoming counts
/// are derivable from it — but both are included so downstream tooling does
/// not have to recompute them. Keys cover every scanned file and every
/// external dependency; unmatched internal targets appear only inside edge
/// lists and in `incoming`.
#[derive(Debug, Serialize)]
pub struct GraphExport {
    /// Node key → ordered target keys (source-text order, duplicates kept).
    pub graph: BTreeMap<String, Vec<String>>,
    /// Node key → derived role.
    pub roles: BTreeMap<String, Role>,
    /// Incoming edge count for every counted key, unmatched targets included.
    pub incoming: BTreeMap<String, usize>,
}

/// Collapse a scan result into its serializable export form.
pub fn export(result: &ScanResult) -> GraphExport {
    let graph = &result.graph;
    let roles = classify(graph);
    let counts = incoming_counts(graph);

    let mut graph_map = BTreeMap::new();
    let mut roles_map = BTreeMap::new();
    let mut incoming_map = BTreeMap::new();

    for (idx, node) in graph.nodes() {
        let key = node.key().export_key();

        incoming_map.insert(key.clone(), counts.get(&idx).copied().unwrap_or(0));

        if !node.is_exported() {
            continue;
        }

        let targets: Vec<String> = graph
            .outgoing(idx)
            .into_iter()
            .map(|target| graph.graph[target].key().export_key())
            .collect();
        graph_map.insert(key.clone(), targets);

        if let Some(role) = roles.get(&idx) {
            roles_map.insert(key, *role);
        }
    }

    GraphExport {
        graph: graph_map,
        roles: roles_map,
        incoming: incoming_map,
    }
}

/// Print the JSON export to stdout.
pub fn print_graph_json(result: &ScanResult, pretty: bool) {
    let export = export(result);
    let rendered = if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error serialising graph: {err}"),
    }
}

/// Print a human-readable scan summary to stdout.
///
/// If any files were skipped, a warning line goes to **stderr** so stdout
/// stays clean for downstream consumers.
pub fn print_summary(result: &ScanResult) {
    let stats = &result.stats;
    let roles = classify(&result.graph);

    let used = roles.values().filter(|r| **r == Role::Used).count();
    let unused = roles.values().filter(|r| **r == Role::Unused).count();

    println!(
        "Scanned {} files in {:.2}s",
        stats.file_count, stats.elapsed_secs
    );
    println!(
        "  {} specifiers ({} static imports, {} requires)",
        stats.import_specifiers + stats.require_specifiers,
        stats.import_specifiers,
        stats.require_specifiers,
    );
    println!(
        "  {} edges ({} internal, {} external), {} external packages",
        result.graph.edge_count(),
        stats.internal_edges,
        stats.external_edges,
        stats.external_packages,
    );
    println!("  {} used, {} unused", used, unused);

    if stats.unmatched_targets > 0 {
        println!(
            "  {} import targets matched no scanned file",
            stats.unmatched_targets
        );
    }
    if stats.skipped > 0 {
        eprintln!("  {} files skipped (unreadable)", stats.skipped);
    }
}

/// Print scan statistics alone, as JSON or a human-readable block.
pub fn print_stats(stats: &ScanStats, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("error serialising stats: {err}"),
        }
        return;
    }

    println!("files: {}", stats.file_count);
    println!(
        "specifiers: {} static, {} require",
        stats.import_specifiers, stats.require_specifiers
    );
    println!(
        "edges: {} internal, {} external",
        stats.internal_edges, stats.external_edges
    );
    println!("external packages: {}", stats.external_packages);
    println!("unmatched targets: {}", stats.unmatched_targets);
    println!("skipped: {}", stats.skipped);
    println!("elapsed: {:.2}s", stats.elapsed_secs);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::ScanConfig;
    use crate::scan::scan;

    #[test]
    fn test_export_keys_are_unique_and_cover_files_and_externals() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "import './b'\nimport 'react'\n").unwrap();
        fs::write(dir.path().join("b.js"), "").unwrap();

        let result = scan(dir.path(), &ScanConfig::default()).unwrap();
        let export = export(&result);

        assert_eq!(export.graph.len(), 3, "a.js, b.js, ext:react");
        assert!(export.graph.contains_key("ext:react"));
        assert_eq!(export.graph["ext:react"], Vec::<String>::new());
        assert_eq!(export.roles["ext:react"], Role::External);
    }

    #[test]
    fn test_export_edge_lists_preserve_source_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.js"),
            "import 'zzz'\nimport './b'\nimport 'aaa'\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.js"), "").unwrap();

        let result = scan(dir.path(), &ScanConfig::default()).unwrap();
        let export = export(&result);

        let root = dir.path().canonicalize().unwrap();
        let a_key = root.join("a.js").to_string_lossy().into_owned();
        let b_key = root.join("b.js").to_string_lossy().into_owned();
        assert_eq!(
            export.graph[&a_key],
            vec!["ext:zzz".to_string(), b_key, "ext:aaa".to_string()],
            "edge order is source-text order, not sorted"
        );
    }

    #[test]
    fn test_unmatched_target_elided_from_graph_but_counted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "import './missing'\n").unwrap();

        let result = scan(dir.path(), &ScanConfig::default()).unwrap();
        let export = export(&result);

        let root = dir.path().canonicalize().unwrap();
        let ghost_key = root.join("missing").to_string_lossy().into_owned();

        assert!(
            !export.graph.contains_key(&ghost_key),
            "unmatched targets are not first-class keys"
        );
        assert!(!export.roles.contains_key(&ghost_key));
        assert_eq!(export.incoming[&ghost_key], 1, "but their counts are visible");

        let a_key = root.join("a.js").to_string_lossy().into_owned();
        assert_eq!(export.graph[&a_key], vec![ghost_key]);
    }

    #[test]
    fn test_export_round_trips_through_serde_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "import 'react'\n").unwrap();

        let result = scan(dir.path(), &ScanConfig::default()).unwrap();
        let json = serde_json::to_string(&export(&result)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["graph"].is_object());
        assert!(parsed["roles"].is_object());
        assert_eq!(parsed["roles"]["ext:react"], "external");
    }
}
