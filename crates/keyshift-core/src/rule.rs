//! Transformation rule contract

/// Result of attempting one rule against a text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The precondition matched and the text was rewritten
    Rewritten(String),
    /// The precondition is absent; the input stands as is
    NotFound,
    /// Something resembling the precondition was found but could not be
    /// matched cleanly, so the rule declined to touch the text
    Rejected(String),
}

impl RuleOutcome {
    /// Resolve the outcome against the input it was computed from
    pub fn into_text(self, input: &str) -> String {
        match self {
            RuleOutcome::Rewritten(text) => text,
            RuleOutcome::NotFound | RuleOutcome::Rejected(_) => input.to_string(),
        }
    }
}

/// A stateless, ordered text-transformation step.
///
/// Implementations must never panic or error when their precondition is
/// absent; they return [`RuleOutcome::NotFound`] and the caller keeps the
/// input unchanged.
pub trait Rule: Send + Sync {
    /// Short identifier (e.g., "remove-refresh-function")
    fn name(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Try to rewrite `text`
    fn attempt(&self, text: &str) -> RuleOutcome;
}
