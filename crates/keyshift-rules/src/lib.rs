//! Rewrite rules for keyshift
//!
//! Each rule is a stateless [`Rule`] that either rewrites its input or
//! leaves it alone. [`standard_rules`] returns them in the order they must
//! run: later rules look at text already changed by earlier ones (the
//! import rule, for one, only fires once the inline refresh function is
//! gone).

pub mod credential;
pub mod function_block;
pub mod import;
pub mod literal;
pub mod token_refresh;

use keyshift_core::{EnvContract, Rule};

pub use credential::ReplaceCredentialLiteral;
pub use function_block::RemoveFunctionBlock;
pub use import::InsertHelperImport;
pub use literal::{SimplifySessionInclude, SimplifyUserGuard};
pub use token_refresh::ReplaceTokenRefresh;

/// Helper exported by `$lib/spotify-auth` that owns token refresh
pub const HELPER_SYMBOL: &str = "getSpotifyToken";

/// The six rules, in application order
pub fn standard_rules(env: &EnvContract) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RemoveFunctionBlock::default()),
        Box::new(ReplaceCredentialLiteral::new(env)),
        Box::new(InsertHelperImport::default()),
        Box::new(ReplaceTokenRefresh),
        Box::new(SimplifySessionInclude),
        Box::new(SimplifyUserGuard),
    ]
}
