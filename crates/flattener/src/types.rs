use serde::{Deserialize, Serialize};

/// One top-level `contract`/`library` block extracted from a source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Source file path this block was extracted from
    pub file_path: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive, after trailing blank lines trimmed)
    pub end_line: usize,

    /// Raw block text, original formatting preserved
    pub text: String,
}

impl Block {
    #[must_use]
    pub const fn new(file_path: String, start_line: usize, end_line: usize, text: String) -> Self {
        Self {
            file_path,
            start_line,
            end_line,
            text,
        }
    }

    /// Get the number of lines in this block
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

/// The result of a dependency walk: the entry file's pragma plus the
/// accumulated block list in prepend order (duplicates still present).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flattened {
    /// The entry file's version directive, if it declared one
    pub pragma: Option<String>,

    /// Accumulated blocks; dependency blocks precede dependent blocks
    pub blocks: Vec<Block>,
}
