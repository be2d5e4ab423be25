use crate::error::{FlattenError, Result};
use crate::types::Flattened;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Derive the output path for an entry file: `<stem>_flattened<.ext>` in the
/// current working directory.
#[must_use]
pub fn flattened_path(entry: &Path) -> PathBuf {
    let stem = entry
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match entry.extension() {
        Some(ext) => format!("{stem}_flattened.{}", ext.to_string_lossy()),
        None => format!("{stem}_flattened"),
    };
    PathBuf::from(name)
}

/// Write the flattened output: the pragma line, a blank line, then each
/// unique block followed by a blank line.
///
/// Blocks are deduplicated by exact text, first occurrence in accumulation
/// order wins, survivor order otherwise preserved. The target is truncated
/// first and every append is awaited before the next one starts. A missing
/// pragma degrades to an empty first line.
pub async fn write_flattened(path: &Path, flattened: &Flattened) -> Result<()> {
    let mut seen = HashSet::new();
    let unique: Vec<_> = flattened
        .blocks
        .iter()
        .filter(|block| seen.insert(block.text.as_str()))
        .collect();

    let mut file = File::create(path)
        .await
        .map_err(|e| FlattenError::from_io(path, e))?;

    append_line(&mut file, path, flattened.pragma.as_deref().unwrap_or("")).await?;
    append_line(&mut file, path, "").await?;
    for block in &unique {
        for line in block.text.split('\n') {
            append_line(&mut file, path, line).await?;
        }
        append_line(&mut file, path, "").await?;
    }
    file.flush()
        .await
        .map_err(|e| FlattenError::from_io(path, e))?;

    log::info!(
        "wrote {} unique blocks ({} accumulated) to {}",
        unique.len(),
        flattened.blocks.len(),
        path.display()
    );
    Ok(())
}

async fn append_line(file: &mut File, path: &Path, line: &str) -> Result<()> {
    file.write_all(line.as_bytes())
        .await
        .map_err(|e| FlattenError::from_io(path, e))?;
    file.write_all(b"\n")
        .await
        .map_err(|e| FlattenError::from_io(path, e))?;
    Ok(())
}
