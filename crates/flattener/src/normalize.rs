/// Normalize a line for directive and boundary detection.
///
/// Collapses every run of two or more spaces to a single space (iteratively,
/// until no double space remains), then strips exactly one leading and one
/// trailing space if present. Never applied to lines destined for output;
/// output keeps the original formatting.
#[must_use]
pub fn normalize(line: &str) -> String {
    let mut s = line.to_string();
    while s.contains("  ") {
        s = s.replace("  ", " ");
    }
    let trimmed = s.strip_prefix(' ').unwrap_or(&s);
    let trimmed = trimmed.strip_suffix(' ').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_interior_runs_and_trims_ends() {
        assert_eq!(normalize("  a   b  "), "a b");
    }

    #[test]
    fn single_spaces_pass_through() {
        assert_eq!(normalize("pragma solidity ^0.5.0;"), "pragma solidity ^0.5.0;");
    }

    #[test]
    fn empty_line_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" "), "");
    }

    #[test]
    fn tabs_are_not_collapsed() {
        assert_eq!(normalize("\ta\tb"), "\ta\tb");
    }
}
