//! Exact-literal rules
//!
//! These only fire on a byte-for-byte match. A near miss (different
//! indentation, spacing, quoting) is left alone.

use keyshift_core::{Rule, RuleOutcome};

/// Replace every occurrence of `from` with `to`, or report `NotFound`
pub fn replace_literal(text: &str, from: &str, to: &str) -> RuleOutcome {
    if text.contains(from) {
        RuleOutcome::Rewritten(text.replace(from, to))
    } else {
        RuleOutcome::NotFound
    }
}

const NESTED_INCLUDE: &str = "include: {
\t\t\t\tuser: {
\t\t\t\t\tinclude: {
\t\t\t\t\t\taccounts: {
\t\t\t\t\t\t\twhere: { provider: 'spotify' }
\t\t\t\t\t\t}
\t\t\t\t\t}
\t\t\t\t}
\t\t\t}";

const FLAT_INCLUDE: &str = "include: {
\t\t\t\tuser: true
\t\t\t}";

/// Stop loading the user's Spotify accounts with the session
pub struct SimplifySessionInclude;

impl Rule for SimplifySessionInclude {
    fn name(&self) -> &'static str {
        "simplify-session-include"
    }

    fn description(&self) -> &'static str {
        "Replace the nested accounts include in the session query with `user: true`"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        replace_literal(text, NESTED_INCLUDE, FLAT_INCLUDE)
    }
}

const ACCOUNT_GUARD: &str = "if (!session?.user?.accounts?.[0])";
const USER_GUARD: &str = "if (!session?.user)";

/// Guard on the user only, since accounts are no longer loaded
pub struct SimplifyUserGuard;

impl Rule for SimplifyUserGuard {
    fn name(&self) -> &'static str {
        "simplify-user-guard"
    }

    fn description(&self) -> &'static str {
        "Check `session?.user` instead of its first account"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        replace_literal(text, ACCOUNT_GUARD, USER_GUARD)
    }
}
