use std::path::{Component, Path, PathBuf};

/// The outcome of resolving a single dependency specifier.
///
/// Resolution is total: every syntactically possible specifier string maps to
/// exactly one target, and nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// A relative specifier resolved against its owning file's directory.
    /// The path is lexically normalized but its existence is never checked —
    /// a typo'd `./utls` resolves just as happily as the real file.
    Internal(PathBuf),
    /// Anything else (bare package name, absolute path, even an empty
    /// string): the specifier passes through verbatim.
    External(String),
}

/// Resolve one specifier in the context of the file that contains it.
///
/// Specifiers starting with `.` (`./x`, `../x`, also a bare `.`) are joined
/// to the owning file's parent directory with `.`/`..` segments folded. No
/// extension inference is performed; `./utils` stays extensionless.
pub fn resolve(specifier: &str, owning_file: &Path) -> Target {
    if !specifier.starts_with('.') {
        return Target::External(specifier.to_string());
    }

    let base = owning_file.parent().unwrap_or_else(|| Path::new(""));
    Target::Internal(normalize(&base.join(specifier)))
}

/// Fold `.` and `..` components lexically. `..` at the filesystem root is
/// dropped rather than preserved, matching OS path resolution on an absolute
/// base.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
