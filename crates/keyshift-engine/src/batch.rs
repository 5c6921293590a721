//! Sequential batch driver

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::detect::{Change, detect_change};
use crate::diff::unified_diff;
use crate::loader::load;
use crate::pipeline::Pipeline;
use crate::report::{BatchReport, FileReport, FileStatus};
use crate::writer::write_back;

/// Whether changed files are written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Apply,
    /// Dry run: report what would change, touch nothing
    Check,
}

pub struct Batch {
    pipeline: Pipeline,
    mode: Mode,
    with_diff: bool,
}

impl Batch {
    pub fn new(pipeline: Pipeline, mode: Mode) -> Self {
        Self {
            pipeline,
            mode,
            with_diff: false,
        }
    }

    /// Attach a unified diff to every changed file's report
    pub fn with_diff(mut self, with_diff: bool) -> Self {
        self.with_diff = with_diff;
        self
    }

    /// Process `paths` in order. A failure on one file never stops the rest.
    pub fn run(&self, paths: &[PathBuf]) -> BatchReport {
        paths.iter().map(|path| self.process(path)).collect()
    }

    fn process(&self, path: &Path) -> FileReport {
        let mut file = match load(path) {
            Ok(file) if !file.exists => {
                warn!(path = %path.display(), "Target file not found");
                return FileReport::new(file.path, FileStatus::NotFound);
            }
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                return FileReport::new(path.to_path_buf(), FileStatus::Failed(e.to_string()));
            }
        };

        let run = self.pipeline.apply(&file.original_text);
        file.current_text = run.text;
        file.changed = detect_change(&file.original_text, &file.current_text) == Change::Changed;
        debug!(path = %path.display(), changed = file.changed, "Pipeline finished");

        let status = match (file.changed, self.mode) {
            (false, _) => FileStatus::Unchanged,
            (true, Mode::Check) => FileStatus::WouldUpdate,
            (true, Mode::Apply) => match write_back(&file) {
                Ok(()) => FileStatus::Updated,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Write failed");
                    FileStatus::Failed(e.to_string())
                }
            },
        };

        let diff = (self.with_diff && file.changed).then(|| {
            unified_diff(
                &path.display().to_string(),
                &file.original_text,
                &file.current_text,
            )
        });

        FileReport {
            path: file.path,
            status,
            records: run.records,
            diff,
        }
    }
}
