use keyshift_core::{Error, Result, TargetFile};

/// Overwrite the file with its rewritten text.
///
/// Does nothing unless the file is marked `changed`.
pub fn write_back(file: &TargetFile) -> Result<()> {
    if !file.changed {
        return Ok(());
    }

    std::fs::write(&file.path, &file.current_text).map_err(|source| Error::Write {
        path: file.path.clone(),
        source,
    })?;
    tracing::info!(path = %file.path.display(), bytes = file.current_text.len(), "Rewrote file");

    Ok(())
}
