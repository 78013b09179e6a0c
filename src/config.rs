use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

/// Directory names skipped entirely during traversal, matched
/// case-insensitively against the bare directory name.
const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build"];

/// File extensions considered source files.
const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Optional `dep-graph.toml` contents. Each field replaces the corresponding
/// default set when present.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    exclude_dirs: Option<Vec<String>>,
    allowed_extensions: Option<Vec<String>>,
}

/// Configuration for a single scan: which directories to skip and which file
/// extensions count as source.
///
/// Each scan owns its config — two concurrent scans with different settings
/// never share state. Matching is case-insensitive on both sets, so entries
/// are stored lowercased.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    excluded_dirs: HashSet<String>,
    allowed_extensions: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: lowered(DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string())),
            allowed_extensions: lowered(DEFAULT_ALLOWED_EXTENSIONS.iter().map(|s| s.to_string())),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML file, falling back to defaults for any
    /// field the file omits.
    ///
    /// Returns the default configuration if the file does not exist or cannot
    /// be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let file = match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!(
                        "warning: failed to parse {}: {err}. Using defaults.",
                        path.display()
                    );
                    ConfigFile::default()
                }
            },
            Err(err) => {
                eprintln!(
                    "warning: failed to read {}: {err}. Using defaults.",
                    path.display()
                );
                ConfigFile::default()
            }
        };

        let mut config = Self::default();
        if let Some(dirs) = file.exclude_dirs {
            config.excluded_dirs = lowered(dirs.into_iter());
        }
        if let Some(exts) = file.allowed_extensions {
            config.allowed_extensions = lowered(exts.into_iter());
        }
        config
    }

    /// Add extra excluded directory names (e.g. from repeated `--exclude` flags).
    pub fn add_excluded_dirs<I: IntoIterator<Item = String>>(&mut self, dirs: I) {
        self.excluded_dirs
            .extend(dirs.into_iter().map(|d| d.to_lowercase()));
    }

    /// Add extra allowed extensions (e.g. from repeated `--ext` flags).
    /// A leading dot is stripped so `--ext .mjs` and `--ext mjs` are equivalent.
    pub fn add_allowed_extensions<I: IntoIterator<Item = String>>(&mut self, exts: I) {
        self.allowed_extensions.extend(
            exts.into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase()),
        );
    }

    /// Returns true if a directory with this bare name is excluded from traversal.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(&name.to_lowercase())
    }

    /// Returns true if a file with this extension is a source file.
    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(&ext.to_lowercase())
    }

    /// The allowed extensions in deterministic (sorted) order, for use as
    /// candidate suffixes when joining extensionless import targets to
    /// scanned files.
    pub fn sorted_extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = self.allowed_extensions.iter().cloned().collect();
        exts.sort();
        exts
    }
}

fn lowered<I: Iterator<Item = String>>(items: I) -> HashSet<String> {
    items.map(|s| s.to_lowercase()).collect()
}
