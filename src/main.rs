mod classify;
mod cli;
mod config;
mod error;
mod extract;
mod graph;
mod output;
mod resolver;
mod scan;
mod walker;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::ScanConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            path,
            json,
            pretty,
            exclude,
            ext,
            config,
        } => {
            let config = build_config(&path, config, exclude, ext);
            let result = scan::scan(&path, &config)?;
            if json || pretty {
                output::print_graph_json(&result, pretty);
            } else {
                output::print_summary(&result);
            }
        }

        Commands::Unused {
            path,
            exclude,
            ext,
            config,
        } => {
            let config = build_config(&path, config, exclude, ext);
            let result = scan::scan(&path, &config)?;
            for file in classify::unused_files(&result.graph) {
                println!("{}", file.display());
            }
        }

        Commands::Stats {
            path,
            json,
            exclude,
            ext,
            config,
        } => {
            let config = build_config(&path, config, exclude, ext);
            let result = scan::scan(&path, &config)?;
            output::print_stats(&result.stats, json);
        }
    }

    Ok(())
}

/// Assemble the effective scan config: TOML file (explicit or
/// `<root>/dep-graph.toml`), then CLI additions on top.
fn build_config(
    root: &Path,
    config_path: Option<PathBuf>,
    exclude: Vec<String>,
    ext: Vec<String>,
) -> ScanConfig {
    let config_path = config_path.unwrap_or_else(|| root.join("dep-graph.toml"));
    let mut config = ScanConfig::load(&config_path);
    config.add_excluded_dirs(exclude);
    config.add_allowed_extensions(ext);
    config
}
