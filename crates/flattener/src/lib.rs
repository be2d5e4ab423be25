//! # Solflat Flattener
//!
//! Import resolution and source flattening for Solidity files.
//!
//! Given an entry file, the flattener walks its transitive `import`
//! statements, extracts every top-level `contract`/`library` block, and
//! concatenates the unique blocks into one self-contained file headed by the
//! entry file's `pragma solidity` directive.
//!
//! ## Pipeline
//!
//! ```text
//! Entry file
//!     │
//!     ├──> Dependency Walker (recursive, importer-relative paths)
//!     │      ├─> Directive Extractor (imports, pragma)
//!     │      └─> Block Extractor (top-level contract/library blocks)
//!     │
//!     └──> Deduplicating Writer
//!            └─> <stem>_flattened<.ext>
//! ```
//!
//! There is deliberately no Solidity parser here: directives and block
//! boundaries are detected from whitespace-normalized lines only, and
//! malformed input degrades instead of erroring.
//!
//! ## Example
//!
//! ```rust
//! use solflat_flattener::extract_blocks;
//!
//! let source = "contract Token {\n    uint256 supply;\n}\n";
//! let blocks = extract_blocks(source, "token.sol");
//! assert_eq!(blocks.len(), 1);
//! assert!(blocks[0].text.starts_with("contract Token {"));
//! ```

mod block;
mod directive;
mod error;
mod normalize;
mod types;
mod walker;
mod writer;

pub use block::extract_blocks;
pub use directive::{extract_imports, extract_pragma};
pub use error::{FlattenError, Result};
pub use normalize::normalize;
pub use types::{Block, Flattened};
pub use walker::{resolve, resolve_import};
pub use writer::{flattened_path, write_flattened};
