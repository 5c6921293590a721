//! Helper import insertion

use std::sync::LazyLock;

use keyshift_core::{Rule, RuleOutcome, find_closing};
use regex::Regex;

use crate::HELPER_SYMBOL;

// Matches the first line that starts an import statement
static FIRST_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^import\b").unwrap());

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\b").unwrap());

/// Import the refresh helper into files that still touch account tokens
pub struct InsertHelperImport {
    helper: &'static str,
    marker: &'static str,
    import_line: &'static str,
}

impl Default for InsertHelperImport {
    fn default() -> Self {
        Self {
            helper: HELPER_SYMBOL,
            marker: "accounts",
            import_line: "import { getSpotifyToken } from '$lib/spotify-auth';",
        }
    }
}

impl InsertHelperImport {
    fn already_imported(&self, text: &str) -> bool {
        text.lines().any(|line| line.trim_end() == self.import_line)
    }
}

/// Byte offset just past the `;` closing the import statement at `start`.
///
/// Braced specifier lists may span lines; anything else must end on its
/// own line, otherwise the statement is not recognised.
fn statement_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => i = find_closing(text, i)? + 1,
            b';' => return Some(i + 1),
            b'\n' => return None,
            _ => i += 1,
        }
    }

    None
}

/// Byte offset just past the `;` ending the leading block of imports.
///
/// The block is the run of consecutive import statements starting at the
/// first line that begins with `import`; it ends at the first line that is
/// not another import (a blank line, a declaration, anything else).
fn import_block_end(text: &str) -> Option<usize> {
    let mut start = FIRST_IMPORT.find(text)?.start();

    loop {
        let end = statement_end(text, start)?;
        let next_line = text[end..].strip_prefix('\n').unwrap_or("");

        if IMPORT_LINE.is_match(next_line) {
            start = end + 1;
        } else {
            return Some(end);
        }
    }
}

impl Rule for InsertHelperImport {
    fn name(&self) -> &'static str {
        "insert-helper-import"
    }

    fn description(&self) -> &'static str {
        "Import getSpotifyToken from $lib/spotify-auth where account tokens are still used"
    }

    fn attempt(&self, text: &str) -> RuleOutcome {
        if text.contains(self.helper) || !text.contains(self.marker) {
            return RuleOutcome::NotFound;
        }
        if self.already_imported(text) {
            return RuleOutcome::NotFound;
        }

        let rewritten = match import_block_end(text) {
            Some(end) => format!("{}\n{}{}", &text[..end], self.import_line, &text[end..]),
            None => format!("{}\n\n{}", self.import_line, text),
        };

        RuleOutcome::Rewritten(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPORT: &str = "import { getSpotifyToken } from '$lib/spotify-auth';";

    #[test]
    fn test_inserted_after_import_block() {
        let text = "import { json } from '@sveltejs/kit';\nimport { PrismaClient } from '@prisma/client';\n\nconst prisma = new PrismaClient();\nconst account = session.user.accounts[0];\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert_eq!(
            out,
            format!(
                "import {{ json }} from '@sveltejs/kit';\nimport {{ PrismaClient }} from '@prisma/client';\n{IMPORT}\n\nconst prisma = new PrismaClient();\nconst account = session.user.accounts[0];\n"
            )
        );
    }

    #[test]
    fn test_block_ending_in_declaration() {
        let text = "import type { PageServerLoad } from './$types';\nexport const load = () => user.accounts;\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert_eq!(
            out,
            format!("import type {{ PageServerLoad }} from './$types';\n{IMPORT}\nexport const load = () => user.accounts;\n")
        );
    }

    #[test]
    fn test_multiline_import_statement() {
        let text = "import {\n\tjson,\n\terror\n} from '@sveltejs/kit';\n\nlet a = accounts;\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert!(out.starts_with(&format!("import {{\n\tjson,\n\terror\n}} from '@sveltejs/kit';\n{IMPORT}\n\n")));
    }

    #[test]
    fn test_prepended_without_imports() {
        let text = "const accounts = [];\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert_eq!(out, format!("{IMPORT}\n\nconst accounts = [];\n"));
    }

    #[test]
    fn test_skipped_when_helper_referenced() {
        let text = "import { getSpotifyToken } from '$lib/auth';\n\nconst a = user.accounts;\n";
        assert_eq!(InsertHelperImport::default().attempt(text), RuleOutcome::NotFound);
    }

    #[test]
    fn test_skipped_without_marker() {
        let text = "import { json } from '@sveltejs/kit';\n\nexport const GET = () => json({});\n";
        assert_eq!(InsertHelperImport::default().attempt(text), RuleOutcome::NotFound);
    }

    #[test]
    fn test_idempotent() {
        let text = "import { json } from '@sveltejs/kit';\n\nconst a = user.accounts;\n";
        let rule = InsertHelperImport::default();
        let once = rule.attempt(text).into_text(text);

        assert_eq!(rule.attempt(&once), RuleOutcome::NotFound);
        assert_eq!(once.matches(IMPORT).count(), 1);
    }

    #[test]
    fn test_block_followed_by_function() {
        let text = "import { json } from '@sveltejs/kit';\nfunction pick(user) {\n\tconst a = user.accounts;\n\n\treturn a;\n}\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert_eq!(
            out,
            format!("import {{ json }} from '@sveltejs/kit';\n{IMPORT}\nfunction pick(user) {{\n\tconst a = user.accounts;\n\n\treturn a;\n}}\n")
        );
    }

    #[test]
    fn test_block_stops_at_first_non_import_line() {
        let text = "import a from 'a';\nimport {\n\tb\n} from 'b';\nlet c = 1;\nimport d from 'd';\n\nconst e = f.accounts;\n";

        assert_eq!(import_block_end(text), text.find("let c").map(|i| i - 1));
    }

    #[test]
    fn test_unterminated_import_falls_back_to_prepend() {
        let text = "import { json } from '@sveltejs/kit'\nfunction pick(user) {\n\treturn user.accounts;\n}\n";

        let out = InsertHelperImport::default().attempt(text).into_text(text);

        assert_eq!(out, format!("{IMPORT}\n\n{text}"));
    }

    #[test]
    fn test_import_block_end_none_without_imports() {
        assert_eq!(import_block_end("const a = 1;\n\nconst b = 2;\n"), None);
    }
}
