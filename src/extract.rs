use std::sync::OnceLock;

use regex::Regex;

/// Which pattern family produced a specifier. Only the stats breakdown cares;
/// resolution treats both identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// ESM static import: `import { X } from './module'` or `import './module'`.
    Import,
    /// CommonJS require: `require('./module')`.
    Require,
}

/// A raw dependency specifier captured from source text, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpecifier {
    pub value: String,
    pub kind: SpecifierKind,
}

// Pattern notes:
// - the optional `... from` group lets the bare side-effect form
//   (`import './polyfill'`) match alongside `import X from './x'`;
// - both quote styles are accepted by the `['"]` classes;
// - extraction is lexical. A specifier-shaped string inside a comment or an
//   unrelated string literal will be captured. That is the contract, not a bug.
const IMPORT_PATTERN: &str = r#"import\s+(?:[^'"]+\s+from\s+)?['"]([^'"]+)['"]"#;
const REQUIRE_PATTERN: &str = r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#;

static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
static REQUIRE_RE: OnceLock<Regex> = OnceLock::new();

fn import_re() -> &'static Regex {
    IMPORT_RE.get_or_init(|| Regex::new(IMPORT_PATTERN).expect("invalid import pattern"))
}

fn require_re() -> &'static Regex {
    REQUIRE_RE.get_or_init(|| Regex::new(REQUIRE_PATTERN).expect("invalid require pattern"))
}

/// Extract every dependency specifier from one file's text.
///
/// Returns the two pattern families concatenated: all static-import matches in
/// text order, then all require matches in text order. A file with no matches
/// produces an empty vec.
pub fn extract_specifiers(text: &str) -> Vec<RawSpecifier> {
    let mut specifiers: Vec<RawSpecifier> = import_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| RawSpecifier {
            value: m.as_str().to_string(),
            kind: SpecifierKind::Import,
        })
        .collect();

    specifiers.extend(
        require_re()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| RawSpecifier {
                value: m.as_str().to_string(),
                kind: SpecifierKind::Require,
            }),
    );

    specifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<String> {
        extract_specifiers(text)
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    #[test]
    fn test_static_import_both_quote_styles() {
        let text = "import a from './a'\nimport b from \"./b\"\n";
        assert_eq!(values(text), vec!["./a", "./b"]);
    }

    #[test]
    fn test_named_and_namespace_imports() {
        let text = "import { useState, useEffect } from 'react'\nimport * as path from 'path'\n";
        assert_eq!(values(text), vec!["react", "path"]);
    }

    #[test]
    fn test_side_effect_import_is_captured() {
        let text = "import 'left-pad'\n";
        assert_eq!(values(text), vec!["left-pad"]);
    }

    #[test]
    fn test_require_call() {
        let text = "const fs = require('fs')\nconst helper = require( \"./helper\" )\n";
        assert_eq!(values(text), vec!["fs", "./helper"]);
    }

    #[test]
    fn test_families_are_concatenated_not_interleaved() {
        // The require appears first in the text, but the import family is
        // emitted first.
        let text = "const a = require('./a')\nimport b from './b'\n";
        let specs = extract_specifiers(text);
        assert_eq!(specs[0].value, "./b");
        assert_eq!(specs[0].kind, SpecifierKind::Import);
        assert_eq!(specs[1].value, "./a");
        assert_eq!(specs[1].kind, SpecifierKind::Require);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let text = "import a from './a'\nimport again from './a'\n";
        assert_eq!(values(text), vec!["./a", "./a"]);
    }

    #[test]
    fn test_no_matches_yields_empty_vec() {
        assert!(values("const x = 1;\n").is_empty());
        assert!(values("").is_empty());
    }

    #[test]
    fn test_matches_inside_comments_are_extracted() {
        // Lexical extraction does not understand comments; this is the
        // documented false-positive behavior.
        let text = "// import old from './retired'\n";
        assert_eq!(values(text), vec!["./retired"]);
    }

    #[test]
    fn test_multiline_import_statement() {
        let text = "import {\n  one,\n  two,\n} from './many'\n";
        assert_eq!(values(text), vec!["./many"]);
    }
}
