use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Walk a source tree and collect candidate source files in discovery order.
///
/// Traversal is depth-first and unbounded. Directories whose bare name is in
/// the excluded set are pruned entirely, descendants included. A file is kept
/// only when its extension is in the allowed set. Entries whose metadata
/// cannot be retrieved are skipped with a stderr warning; only a failure of
/// the root path itself aborts the walk.
pub fn walk_tree(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    if root.as_os_str().is_empty() {
        return Err(ScanError::InvalidInput);
    }

    let root = validate_root(root)?;

    // filter_entry prunes excluded directories before their contents are
    // visited, so an excluded name at any depth removes the whole subtree.
    let filter_config = config.clone();
    let walker = ignore::WalkBuilder::new(&root)
        .standard_filters(false)
        .filter_entry(move |entry| {
            // The root itself is never name-filtered; exclusion applies to
            // directories discovered beneath it.
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !filter_config.is_excluded_dir(&name)
        })
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("warning: skipping entry: {err}");
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue,
        };
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.is_allowed_extension(ext) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Check the root path and canonicalize it so every discovered file path is
/// absolute and normalized. Root problems are the only fatal failures.
fn validate_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = match std::fs::metadata(root) {
        Ok(m) => m,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        Err(err) => {
            return Err(ScanError::RootUnreadable {
                path: root.to_path_buf(),
                source: err,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(ScanError::RootNotADirectory(root.to_path_buf()));
    }

    std::fs::canonicalize(root).map_err(|err| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_collects_only_allowed_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();
        fs::write(dir.path().join("page.tsx"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::write(dir.path().join("styles.css"), "").unwrap();

        let files = walk_tree(dir.path(), &ScanConfig::default()).unwrap();
        let names = names(&files);

        assert!(names.contains(&"app.js".to_string()));
        assert!(names.contains(&"page.tsx".to_string()));
        assert!(!names.contains(&"README.md".to_string()));
        assert!(!names.contains(&"styles.css".to_string()));
    }

    #[test]
    fn test_excluded_dirs_pruned_at_any_depth() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("node_modules").join("react");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("index.js"), "").unwrap();
        fs::write(dir.path().join("src").join("main.js"), "").unwrap();

        let files = walk_tree(dir.path(), &ScanConfig::default()).unwrap();

        assert_eq!(names(&files), vec!["main.js"]);
    }

    #[test]
    fn test_excluded_dir_name_matches_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let shouting = dir.path().join("NODE_MODULES");
        fs::create_dir_all(&shouting).unwrap();
        fs::write(shouting.join("dep.js"), "").unwrap();

        let files = walk_tree(dir.path(), &ScanConfig::default()).unwrap();

        assert!(files.is_empty(), "NODE_MODULES should be pruned");
    }

    #[test]
    fn test_returned_paths_are_absolute() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();

        let files = walk_tree(dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].is_absolute());
    }

    #[test]
    fn test_empty_root_rejected_before_traversal() {
        let err = walk_tree(Path::new(""), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        let err = walk_tree(&gone, &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound(_)));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.js");
        fs::write(&file, "").unwrap();
        let err = walk_tree(&file, &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::RootNotADirectory(_)));
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = walk_tree(dir.path(), &ScanConfig::default()).unwrap();
        assert!(files.is_empty());
    }
}
