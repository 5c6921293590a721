//! Inline token refresh replacement
//!
//! The route handlers read `access_token` off the first linked account and
//! then refresh it in place when expired. That whole block collapses into a
//! call to the shared helper plus a single authorization guard.
//!
//! The block is located in two steps: a regex pins the opening lines, then
//! the conditional that follows is measured by delimiter balance. A match
//! that does not close cleanly, or lacks the `catch` handler the refresh
//! logic always carries, is rejected instead of being rewritten.

use std::sync::LazyLock;

use keyshift_core::{Rule, RuleOutcome, find_closing};
use regex::Regex;

// Account lookup, token read, blank line, expiry comment, then `if`
static REFRESH_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^([ \t]*)const account = session\.user\.accounts\[0\];\n",
        r"\s*let accessToken = account\.access_token;\n",
        r"\n",
        r"\s*// Check if token is expired[^\n]*\n",
        r"\s*if\s*",
    ))
    .unwrap()
});

static CATCH_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"catch\s*\(\s*\w+\s*\)\s*\{").unwrap());

/// Replace inline expiry-check-and-refresh logic with `getSpotifyToken`
pub struct ReplaceTokenRefresh;

struct RefreshBlock<'t> {
    start: usize,
    end: usize,
    indent: &'t str,
}

fn locate(text: &str) -> Result<Vec<RefreshBlock<'_>>, String> {
    let mut blocks: Vec<RefreshBlock<'_>> = Vec::new();

    for caps in REFRESH_HEAD.captures_iter(text) {
        let (Some(head), Some(indent)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let start = indent.end();

        if let Some(prev) = blocks.last()
            && start < prev.end
        {
            return Err(format!("refresh block at byte {start} overlaps the previous one"));
        }

        let cond_open = head.end();
        if !text[cond_open..].starts_with('(') {
            return Err(format!("expected `(` after `if` at byte {cond_open}"));
        }
        let cond_close = find_closing(text, cond_open)
            .ok_or_else(|| format!("unbalanced condition at byte {cond_open}"))?;

        let rest = &text[cond_close + 1..];
        let body_open = cond_close + 1 + (rest.len() - rest.trim_start().len());
        if !text[body_open..].starts_with('{') {
            return Err(format!("expected `{{` to open the expiry check at byte {body_open}"));
        }
        let body_close = find_closing(text, body_open)
            .ok_or_else(|| format!("unbalanced expiry check body at byte {body_open}"))?;

        let body = &text[body_open..=body_close];
        let Some(catch) = CATCH_CLAUSE.find(body) else {
            return Err(format!("expiry check at byte {body_open} has no catch handler"));
        };
        // The handler's own block must close inside the expiry check
        if find_closing(body, catch.end() - 1).is_none() {
            return Err(format!("catch handler at byte {} is not closed", body_open + catch.start()));
        }

        blocks.push(RefreshBlock {
            start,
            end: body_close + 1,
            indent: indent.as_str(),
        });
    }

    Ok(blocks)
}

/// One indentation level deeper than `indent`
fn nested(indent: &str) -> String {
    if indent.ends_with(' ') {
        format!("{indent}  ")
    } else {
        format!("{indent}\t")
    }
}

fn delegation(indent: &str) -> String {
    let inner = nested(indent);
    format!(
        "// Get a valid Spotify token (handles refresh automatically)\n\
         {indent}const accessToken = await getSpotifyToken(session.user.id);\n\
         \n\
         {indent}if (!accessToken) {{\n\
         {inner}return json({{ error: 'No Spotify account connected or failed to refresh token' }}, {{ status: 401 }});\n\
         {indent}}}"
    )
}

impl Rule for ReplaceTokenRefresh {
    fn name(&self) -> &'static str {
        "replace-token-refresh"
    }

    fn description(&self) -> &'static str {
        "Replace inline access token expiry/refresh logic with a getSpotifyToken() call"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        let blocks = match locate(text) {
            Ok(blocks) if blocks.is_empty() => return RuleOutcome::NotFound,
            Ok(blocks) => blocks,
            Err(reason) => return RuleOutcome::Rejected(reason),
        };

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for block in blocks {
            out.push_str(&text[cursor..block.start]);
            out.push_str(&delegation(block.indent));
            cursor = block.end;
        }
        out.push_str(&text[cursor..]);

        RuleOutcome::Rewritten(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFRESH_BLOCK: &str = "\t\tconst account = session.user.accounts[0];
\t\tlet accessToken = account.access_token;

\t\t// Check if token is expired
\t\tif (account.expires_at && account.expires_at < Math.floor(Date.now() / 1000)) {
\t\t\t// Refresh the token
\t\t\tif (account.refresh_token) {
\t\t\t\ttry {
\t\t\t\t\tconst tokens = await refreshAccessToken(account.refresh_token);

\t\t\t\t\tawait prisma.account.update({
\t\t\t\t\t\twhere: { id: account.id },
\t\t\t\t\t\tdata: { access_token: tokens.access_token }
\t\t\t\t\t});

\t\t\t\t\taccessToken = tokens.access_token;
\t\t\t\t} catch (err) {
\t\t\t\t\tconsole.error('Failed to refresh token:', err);
\t\t\t\t\treturn {
\t\t\t\t\t\tspotifyPlaylists: [],
\t\t\t\t\t\terror: 'Failed to refresh token'
\t\t\t\t\t};
\t\t\t\t}
\t\t\t}
\t\t}";

    const DELEGATION: &str = "\t\t// Get a valid Spotify token (handles refresh automatically)
\t\tconst accessToken = await getSpotifyToken(session.user.id);

\t\tif (!accessToken) {
\t\t\treturn json({ error: 'No Spotify account connected or failed to refresh token' }, { status: 401 });
\t\t}";

    fn wrap(block: &str) -> String {
        format!("\ttry {{\n{block}\n\n\t\tconst response = await fetch(url);\n\t}} catch (e) {{}}\n")
    }

    #[test]
    fn test_block_replaced() {
        let text = wrap(REFRESH_BLOCK);

        let out = ReplaceTokenRefresh.attempt(&text).into_text(&text);

        assert_eq!(out, wrap(DELEGATION));
    }

    #[test]
    fn test_catch_block_with_nested_braces_fully_consumed() {
        let text = wrap(REFRESH_BLOCK);
        let out = ReplaceTokenRefresh.attempt(&text).into_text(&text);

        assert!(!out.contains("spotifyPlaylists"));
        assert!(!out.contains("refreshAccessToken"));
        assert!(out.contains("const response = await fetch(url);"));
    }

    #[test]
    fn test_space_indentation_followed() {
        let block = REFRESH_BLOCK.replace('\t', "    ");
        let text = wrap(&block);

        let out = ReplaceTokenRefresh.attempt(&text).into_text(&text);

        assert!(out.contains(
            "        const accessToken = await getSpotifyToken(session.user.id);\n"
        ));
        assert!(out.contains("          return json("));
    }

    #[test]
    fn test_already_migrated_is_noop() {
        let text = wrap(DELEGATION);
        assert_eq!(ReplaceTokenRefresh.attempt(&text), RuleOutcome::NotFound);
    }

    #[test]
    fn test_missing_catch_is_rejected() {
        let block = REFRESH_BLOCK
            .replace("\t\t\t\ttry {\n", "\t\t\t\t{\n")
            .replace("} catch (err) {", "} finally {");
        let text = wrap(&block);

        let outcome = ReplaceTokenRefresh.attempt(&text);

        assert!(matches!(outcome, RuleOutcome::Rejected(_)));
        assert_eq!(outcome.into_text(&text), text);
    }

    #[test]
    fn test_truncated_block_is_rejected() {
        // Outer conditional never closes
        let block = REFRESH_BLOCK.trim_end_matches("\n\t\t}");
        let text = format!("{block}\n");

        let outcome = ReplaceTokenRefresh.attempt(&text);

        assert!(matches!(outcome, RuleOutcome::Rejected(_)));
        assert_eq!(outcome.into_text(&text), text);
    }

    #[test]
    fn test_head_without_blank_line_is_noop() {
        let block = REFRESH_BLOCK.replacen("access_token;\n\n", "access_token;\n", 1);
        let text = wrap(&block);
        assert_eq!(ReplaceTokenRefresh.attempt(&text), RuleOutcome::NotFound);
    }
}
