//! Inline token refresh function removal

use keyshift_core::{Rule, RuleOutcome, find_closing};

const REFRESH_SIGNATURE: &str = "async function refreshAccessToken(refreshToken: string) {";

/// Delete a named function definition together with its whole body
pub struct RemoveFunctionBlock {
    signature: &'static str,
}

impl Default for RemoveFunctionBlock {
    fn default() -> Self {
        Self {
            signature: REFRESH_SIGNATURE,
        }
    }
}

impl RemoveFunctionBlock {
    /// Byte spans of every definition, signature through closing brace
    fn spans(&self, text: &str) -> Result<Vec<(usize, usize)>, String> {
        let mut spans = Vec::new();

        for (start, _) in text.match_indices(self.signature) {
            if let Some(&(_, prev_end)) = spans.last()
                && start < prev_end
            {
                return Err(format!(
                    "`{}` at byte {start} sits inside the previous definition",
                    self.signature
                ));
            }

            // The signature ends on the body's opening brace
            let open = start + self.signature.len() - 1;
            let close = find_closing(text, open).ok_or_else(|| {
                format!(
                    "body of `{}` at byte {start} has no balanced closing brace",
                    self.signature
                )
            })?;
            spans.push((start, close + 1));
        }

        Ok(spans)
    }
}

impl Rule for RemoveFunctionBlock {
    fn name(&self) -> &'static str {
        "remove-refresh-function"
    }

    fn description(&self) -> &'static str {
        "Delete the inline refreshAccessToken() helper that embeds client credentials"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        let spans = match self.spans(text) {
            Ok(spans) if spans.is_empty() => return RuleOutcome::NotFound,
            Ok(spans) => spans,
            Err(reason) => return RuleOutcome::Rejected(reason),
        };

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, end) in spans {
            out.push_str(&text[cursor..start]);
            cursor = end;
        }
        out.push_str(&text[cursor..]);

        RuleOutcome::Rewritten(out)
    }
}
