//! Source splitting and home-alias expansion
//!
//! Submitted code is partitioned into import lines and body lines so the
//! harness synthesizer can hoist the imports to module scope while the body
//! runs inside an async wrapper. The partition rule is deliberately simple:
//! a line is an import iff, ignoring leading whitespace, it begins with the
//! `import` keyword followed by whitespace. Multi-line import statements are
//! not recognized; each import must be fully expressed on one line. That is
//! a constraint of the splitting rule, not a parsing bug.
//!
//! Alias expansion rewrites `~/` at the start of a quoted module path to the
//! resolved home directory. It applies to import lines only and is strictly
//! textual, with no check that the resulting path exists.

use std::path::Path;

/// Source text partitioned into imports and body, both order-preserving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub imports: Vec<String>,
    pub body: Vec<String>,
}

fn is_import_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("import")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace()))
}

fn expand_home_alias(line: &str, home_dir: &Path) -> String {
    let home = home_dir.to_string_lossy();
    line.replace("'~/", &format!("'{}/", home))
        .replace("\"~/", &format!("\"{}/", home))
}

/// Partition `code` into import and body lines, expanding `~/` inside the
/// quoted module paths of import lines. Pure function of its inputs.
pub fn split_source(code: &str, home_dir: &Path) -> ParsedSource {
    let mut imports = Vec::new();
    let mut body = Vec::new();

    for line in code.lines() {
        if is_import_line(line) {
            imports.push(expand_home_alias(line, home_dir));
        } else {
            body.push(line.to_string());
        }
    }

    ParsedSource { imports, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn home() -> PathBuf {
        PathBuf::from("/home/tester")
    }

    #[test]
    fn test_split_imports_from_body() {
        let code = "import { a } from 'mod';\nconst x = 1;\nreturn x;";
        let parsed = split_source(code, &home());
        assert_eq!(parsed.imports, vec!["import { a } from 'mod';"]);
        assert_eq!(parsed.body, vec!["const x = 1;", "return x;"]);
    }

    #[test]
    fn test_body_order_preserved() {
        let code = "const a = 1;\nimport b from 'b';\nconst c = a;";
        let parsed = split_source(code, &home());
        assert_eq!(parsed.body, vec!["const a = 1;", "const c = a;"]);
        assert_eq!(parsed.imports, vec!["import b from 'b';"]);
    }

    #[test]
    fn test_indented_import_recognized() {
        let code = "  import x from 'x';";
        let parsed = split_source(code, &home());
        assert_eq!(parsed.imports.len(), 1);
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn test_import_requires_trailing_whitespace() {
        // `imports` is an identifier, not an import statement.
        let code = "imports.push(1);\nimport{x} from 'x';";
        let parsed = split_source(code, &home());
        assert!(parsed.imports.is_empty());
        assert_eq!(parsed.body.len(), 2);
    }

    #[test]
    fn test_home_alias_expanded_in_single_quotes() {
        let code = "import { util } from '~/lib/util.ts';";
        let parsed = split_source(code, &home());
        assert_eq!(
            parsed.imports,
            vec!["import { util } from '/home/tester/lib/util.ts';"]
        );
    }

    #[test]
    fn test_home_alias_expanded_in_double_quotes() {
        let code = "import util from \"~/lib/util.ts\";";
        let parsed = split_source(code, &home());
        assert_eq!(
            parsed.imports,
            vec!["import util from \"/home/tester/lib/util.ts\";"]
        );
    }

    #[test]
    fn test_home_alias_untouched_in_body() {
        let code = "const p = '~/data.json';";
        let parsed = split_source(code, &home());
        assert_eq!(parsed.body, vec!["const p = '~/data.json';"]);
    }

    #[test]
    fn test_non_alias_paths_untouched() {
        let code = "import x from './relative';\nimport y from 'pkg';";
        let parsed = split_source(code, &home());
        assert_eq!(
            parsed.imports,
            vec!["import x from './relative';", "import y from 'pkg';"]
        );
    }

    #[test]
    fn test_empty_input() {
        let parsed = split_source("", &home());
        assert!(parsed.imports.is_empty());
        assert!(parsed.body.is_empty());
    }
}
