//! Batch rewrite engine for keyshift
//!
//! Drives each listed file through load, the ordered rule pipeline, change
//! detection and (conditionally) write-back, collecting one outcome per
//! file. Files are processed strictly one after another.

pub mod batch;
pub mod detect;
pub mod diff;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod writer;

pub use batch::{Batch, Mode};
pub use detect::{Change, detect_change};
pub use diff::unified_diff;
pub use loader::load;
pub use pipeline::{Pipeline, PipelineRun, RuleRecord, RuleStatus};
pub use report::{BatchReport, FileReport, FileStatus, trailer};
pub use writer::write_back;
