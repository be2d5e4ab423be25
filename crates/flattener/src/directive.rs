use crate::normalize::normalize;

const IMPORT_MARKER: &str = "import ";
const PRAGMA_MARKER: &str = "pragma solidity";

/// Collect the relative paths referenced by `import` statements.
///
/// Scans normalized lines top to bottom and stops at the first line that
/// contains a top-level declaration keyword; imports are assumed to precede
/// declarations. The path token has its surrounding quotes removed and the
/// trailing statement terminator dropped.
#[must_use]
pub fn extract_imports(content: &str) -> Vec<String> {
    let mut imports = Vec::new();

    for line in content.split('\n') {
        let line = normalize(line);
        if line.contains(IMPORT_MARKER) {
            let Some(token) = line.split(' ').nth(1) else {
                continue;
            };
            let mut path: String = token.chars().filter(|c| !matches!(c, '"' | '\'')).collect();
            path.pop();
            imports.push(path);
        } else if line.contains("contract ") || line.contains("library ") {
            break;
        }
    }

    imports
}

/// Find the version directive: the first normalized line containing the
/// pragma marker, or `None` when the file does not declare one.
#[must_use]
pub fn extract_pragma(content: &str) -> Option<String> {
    content
        .split('\n')
        .map(normalize)
        .find(|line| line.contains(PRAGMA_MARKER))
}
