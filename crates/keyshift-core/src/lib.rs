//! Core domain models for keyshift
//!
//! This crate contains:
//! - Domain models (TargetFile, Rule, RuleOutcome, EnvContract)
//! - Error types shared by the engine and the rules
//! - Delimiter-balance scanning used by the structural rules

pub mod env;
pub mod error;
pub mod rule;
pub mod scan;
pub mod target;

pub use env::EnvContract;
pub use error::{Error, Result};
pub use rule::{Rule, RuleOutcome};
pub use scan::find_closing;
pub use target::TargetFile;
