use std::io::ErrorKind;
use std::path::Path;

use keyshift_core::{Error, Result, TargetFile};

/// Read a target file in full.
///
/// When nothing exists at `path` the result is [`TargetFile::absent`]; the
/// caller reports it and moves on. The text is kept exactly as read.
pub fn load(path: &Path) -> Result<TargetFile> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(TargetFile::loaded(path.to_path_buf(), text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(TargetFile::absent(path.to_path_buf())),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
