use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dependency graph extractor for JavaScript/TypeScript projects.
///
/// dep-graph walks a source tree, lexically extracts import/require
/// specifiers, and builds a directed dependency graph classified into used,
/// unused, and external nodes — the data a graph viewer needs, with none of
/// the rendering.
#[derive(Parser, Debug)]
#[command(
    name = "dep-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project tree and print its dependency graph.
    ///
    /// Human-readable summary by default; `--json` emits the full graph with
    /// roles and incoming counts for programmatic consumers.
    Scan {
        /// Path to the root directory to scan.
        path: PathBuf,

        /// Output the graph as JSON instead of a summary.
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON output (implies --json).
        #[arg(long)]
        pretty: bool,

        /// Extra directory names to exclude, in addition to the configured set.
        #[arg(long = "exclude", value_name = "DIR")]
        exclude: Vec<String>,

        /// Extra file extensions to treat as source, in addition to the configured set.
        #[arg(long = "ext", value_name = "EXTENSION")]
        ext: Vec<String>,

        /// Path to a TOML config file (default: <PATH>/dep-graph.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List scanned files that no other scanned file imports.
    ///
    /// One absolute path per line, sorted. External dependencies are never
    /// listed.
    Unused {
        /// Path to the root directory to scan.
        path: PathBuf,

        /// Extra directory names to exclude, in addition to the configured set.
        #[arg(long = "exclude", value_name = "DIR")]
        exclude: Vec<String>,

        /// Extra file extensions to treat as source, in addition to the configured set.
        #[arg(long = "ext", value_name = "EXTENSION")]
        ext: Vec<String>,

        /// Path to a TOML config file (default: <PATH>/dep-graph.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print scan statistics without the graph itself.
    Stats {
        /// Path to the root directory to scan.
        path: PathBuf,

        /// Output the statistics as JSON.
        #[arg(long)]
        json: bool,

        /// Extra directory names to exclude, in addition to the configured set.
        #[arg(long = "exclude", value_name = "DIR")]
        exclude: Vec<String>,

        /// Extra file extensions to treat as source, in addition to the configured set.
        #[arg(long = "ext", value_name = "EXTENSION")]
        ext: Vec<String>,

        /// Path to a TOML config file (default: <PATH>/dep-graph.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
