use crate::normalize::normalize;
use crate::types::Block;

/// Split a file into its top-level `contract`/`library` blocks, in file order.
///
/// Boundary detection runs on normalized lines: a block starts where the
/// space-split token list begins with a declaration keyword and ends with an
/// open brace. Block text keeps the raw lines untouched, with trailing blank
/// lines trimmed. A file with no declarations at all degrades to a single
/// block holding the whole trimmed file.
#[must_use]
pub fn extract_blocks(content: &str, file_path: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if !starts_block(line) {
            continue;
        }
        if let Some(start) = open {
            // The line just before the new declaration is dropped from the
            // closing range; separating blank lines make this invisible.
            blocks.push(close_block(&lines, start, idx - 1, file_path));
        }
        open = Some(idx);
    }

    let start = open.unwrap_or(0);
    blocks.push(close_block(&lines, start, lines.len(), file_path));
    blocks
}

fn starts_block(line: &str) -> bool {
    let normalized = normalize(line);
    let words: Vec<&str> = normalized.split(' ').collect();
    (words[0] == "contract" || words[0] == "library") && words.last() == Some(&"{")
}

fn close_block(lines: &[&str], start: usize, end: usize, file_path: &str) -> Block {
    let mut range = &lines[start..end];
    while range.last() == Some(&"") {
        range = &range[..range.len() - 1];
    }
    Block::new(
        file_path.to_string(),
        start + 1,
        start + range.len().max(1),
        range.join("\n"),
    )
}
