//! Hardcoded client credentials

use keyshift_core::{EnvContract, Rule, RuleOutcome};

use crate::literal::replace_literal;

/// The `client_id:client_secret` pair that shipped in the route handlers
pub const LEAKED_CREDENTIAL: &str =
    "'69bf2b1658984b20b7fcbe93915814f6:f2523336f86e4ba8b9cc15f293825963'";

/// Swap the quoted credential pair for a template literal over env vars
pub struct ReplaceCredentialLiteral {
    replacement: String,
}

impl ReplaceCredentialLiteral {
    pub fn new(env: &EnvContract) -> Self {
        Self {
            replacement: format!(
                "`${{process.env.{}}}:${{process.env.{}}}`",
                env.client_id, env.client_secret
            ),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Rule for ReplaceCredentialLiteral {
    fn name(&self) -> &'static str {
        "replace-credential-literal"
    }

    fn description(&self) -> &'static str {
        "Replace the hardcoded client id/secret literal with process.env references"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        replace_literal(text, LEAKED_CREDENTIAL, &self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_header(credential: &str) -> String {
        format!("const basic = Buffer.from({credential}).toString('base64');\n")
    }

    #[test]
    fn test_replacement_form() {
        let rule = ReplaceCredentialLiteral::new(&EnvContract::default());
        assert_eq!(
            rule.replacement(),
            "`${process.env.AUTH_SPOTIFY_ID}:${process.env.AUTH_SPOTIFY_SECRET}`"
        );
    }

    #[test]
    fn test_literal_replaced() {
        let rule = ReplaceCredentialLiteral::new(&EnvContract::default());
        let text = basic_header(LEAKED_CREDENTIAL);

        let out = rule.attempt(&text).into_text(&text);

        assert_eq!(
            out,
            "const basic = Buffer.from(`${process.env.AUTH_SPOTIFY_ID}:${process.env.AUTH_SPOTIFY_SECRET}`).toString('base64');\n"
        );
        assert!(!out.contains("f2523336f86e4ba8b9cc15f293825963"));
    }

    #[test]
    fn test_custom_env_names() {
        let env = EnvContract {
            client_id: "SPOTIFY_CLIENT_ID".to_string(),
            client_secret: "SPOTIFY_CLIENT_SECRET".to_string(),
            ..EnvContract::default()
        };
        let rule = ReplaceCredentialLiteral::new(&env);
        let text = basic_header(LEAKED_CREDENTIAL);

        let out = rule.attempt(&text).into_text(&text);
        assert!(out.contains("${process.env.SPOTIFY_CLIENT_ID}:${process.env.SPOTIFY_CLIENT_SECRET}"));
    }

    #[test]
    fn test_near_misses_untouched() {
        let rule = ReplaceCredentialLiteral::new(&EnvContract::default());
        let variants = [
            // double quotes
            LEAKED_CREDENTIAL.replace('\'', "\""),
            // padded
            LEAKED_CREDENTIAL.replace(':', " : "),
            // different secret
            LEAKED_CREDENTIAL.replace("f2523336", "00000000"),
        ];

        for credential in variants {
            let text = basic_header(&credential);
            assert_eq!(rule.attempt(&text), RuleOutcome::NotFound, "{credential}");
        }
    }

    #[test]
    fn test_idempotent() {
        let rule = ReplaceCredentialLiteral::new(&EnvContract::default());
        let text = basic_header(LEAKED_CREDENTIAL);
        let once = rule.attempt(&text).into_text(&text);

        assert_eq!(rule.attempt(&once), RuleOutcome::NotFound);
    }
}
