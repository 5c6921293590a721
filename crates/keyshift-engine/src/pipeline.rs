//! Ordered rule pipeline

use std::fmt;

use keyshift_core::{EnvContract, Rule, RuleOutcome};
use tracing::{debug, warn};

/// How a single rule fared on a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleStatus {
    Applied,
    NotFound,
    Rejected(String),
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleStatus::Applied => write!(f, "applied"),
            RuleStatus::NotFound => write!(f, "not found"),
            RuleStatus::Rejected(reason) => write!(f, "rejected ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    pub rule: &'static str,
    pub status: RuleStatus,
}

/// Output of one pass over a text buffer
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub text: String,
    pub records: Vec<RuleRecord>,
}

/// Rules applied left to right, each seeing the previous rule's output
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Pipeline {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The six credential-migration rules in their fixed order
    pub fn standard(env: &EnvContract) -> Self {
        Self::new(keyshift_rules::standard_rules(env))
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn apply(&self, input: &str) -> PipelineRun {
        let mut text = input.to_string();
        let mut records = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let status = match rule.attempt(&text) {
                RuleOutcome::Rewritten(next) => {
                    text = next;
                    RuleStatus::Applied
                }
                RuleOutcome::NotFound => RuleStatus::NotFound,
                RuleOutcome::Rejected(reason) => {
                    warn!(rule = rule.name(), %reason, "Ambiguous match, leaving text untouched");
                    RuleStatus::Rejected(reason)
                }
            };
            debug!(rule = rule.name(), %status, "Rule evaluated");
            records.push(RuleRecord {
                rule: rule.name(),
                status,
            });
        }

        PipelineRun { text, records }
    }
}
