use std::path::PathBuf;

/// A file enumerated by the caller, alive for one batch run
#[derive(Debug, Clone)]
pub struct TargetFile {
    pub path: PathBuf,
    pub original_text: String,
    pub current_text: String,
    pub exists: bool,
    pub changed: bool,
}

impl TargetFile {
    /// A file that was read successfully
    pub fn loaded(path: PathBuf, text: String) -> Self {
        Self {
            path,
            current_text: text.clone(),
            original_text: text,
            exists: true,
            changed: false,
        }
    }

    /// A listed path with nothing behind it
    pub fn absent(path: PathBuf) -> Self {
        Self {
            path,
            original_text: String::new(),
            current_text: String::new(),
            exists: false,
            changed: false,
        }
    }
}
