use crate::block::extract_blocks;
use crate::directive::{extract_imports, extract_pragma};
use crate::error::{FlattenError, Result};
use crate::types::{Block, Flattened};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// Walk the import graph rooted at `entry` and accumulate every block.
///
/// Each visited file's blocks are spliced at the front of the accumulator, so
/// the blocks of the last-visited dependency end up first and the entry
/// file's own blocks last; the writer later keeps the first occurrence of any
/// duplicated text. Only the entry file's pragma is kept.
///
/// Import cycles are not detected: a file that imports itself, directly or
/// transitively, never completes and eventually exhausts the stack.
pub async fn resolve(entry: impl AsRef<Path>) -> Result<Flattened> {
    let mut blocks = Vec::new();
    let pragma = visit(entry.as_ref().to_path_buf(), &mut blocks).await?;
    log::info!(
        "resolved {} with {} accumulated blocks",
        entry.as_ref().display(),
        blocks.len()
    );
    Ok(Flattened { pragma, blocks })
}

/// Resolve an import path against the directory of the file declaring it.
#[must_use]
pub fn resolve_import(importer: &Path, import: &str) -> PathBuf {
    importer.parent().unwrap_or_else(|| Path::new("")).join(import)
}

fn visit<'a>(
    path: PathBuf,
    acc: &'a mut Vec<Block>,
) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + 'a>> {
    Box::pin(async move {
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FlattenError::from_io(&path, e))?;
        // Normalize line endings once so splitting never depends on the
        // platform the file was authored on.
        let content = raw.replace("\r\n", "\n");

        let pragma = extract_pragma(&content);
        let imports = extract_imports(&content);
        let own = extract_blocks(&content, &path.display().to_string());
        log::debug!(
            "visited {}: {} blocks, {} imports",
            path.display(),
            own.len(),
            imports.len()
        );

        acc.splice(0..0, own);

        for import in &imports {
            let dep = resolve_import(&path, import);
            visit(dep, acc).await?;
        }

        Ok(pragma)
    })
}
