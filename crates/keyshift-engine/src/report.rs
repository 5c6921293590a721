//! Per-file outcomes and the batch summary

use std::fmt;
use std::path::PathBuf;

use keyshift_core::EnvContract;

use crate::pipeline::RuleRecord;

/// Terminal state of one listed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Rewritten on disk
    Updated,
    /// Would be rewritten (dry run)
    WouldUpdate,
    /// Pipeline produced identical text
    Unchanged,
    /// Nothing exists at the listed path
    NotFound,
    /// Could not be read or written
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub records: Vec<RuleRecord>,
    pub diff: Option<String>,
}

impl FileReport {
    pub fn new(path: PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            records: Vec::new(),
            diff: None,
        }
    }

    /// Updated or skipped, per the two-valued batch outcome
    pub fn is_updated(&self) -> bool {
        matches!(self.status, FileStatus::Updated | FileStatus::WouldUpdate)
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.status {
            FileStatus::Updated => write!(f, "updated: {path}"),
            FileStatus::WouldUpdate => write!(f, "would update: {path}"),
            FileStatus::Unchanged => write!(f, "no changes needed: {path}"),
            FileStatus::NotFound => write!(f, "not found: {path}"),
            FileStatus::Failed(reason) => write!(f, "failed: {path} ({reason})"),
        }
    }
}

/// Outcomes for every listed file, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn updated_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_updated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.files.len() - self.updated_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// One status line per file
    pub fn lines(&self) -> Vec<String> {
        self.files.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<FileReport> for BatchReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Closing reminder naming the variables the rewritten code now reads
pub fn trailer(env: &EnvContract) -> String {
    let mut out = String::from(
        "Done! Hardcoded credentials have been replaced.\nMake sure your .env file contains:\n",
    );
    for line in env.dotenv_lines() {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
