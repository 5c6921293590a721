pub mod check;
pub mod init;
pub mod rules;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;
use keyshift_config::{Config, ConfigSource};
use keyshift_core::EnvContract;
use keyshift_engine::BatchReport;

/// Targets to process plus the environment contract they migrate to
pub struct Plan {
    pub targets: Vec<PathBuf>,
    pub env: EnvContract,
}

/// Resolve config and the target list; explicit paths replace configured ones
pub fn plan(paths: Vec<PathBuf>, config: Option<PathBuf>) -> Result<Plan> {
    let loaded = Config::load(config.as_deref())?;
    match &loaded.source {
        ConfigSource::Explicit(path) | ConfigSource::Project(path) | ConfigSource::Global(path) => {
            tracing::debug!(config = %path.display(), "Loaded config");
        }
        ConfigSource::Defaults => tracing::debug!("Using built-in defaults"),
    }

    let targets = if paths.is_empty() {
        loaded.target_paths()
    } else {
        paths
    };

    if targets.is_empty() {
        anyhow::bail!("No target files given and none configured in keyshift.toml");
    }

    Ok(Plan {
        targets,
        env: loaded.config.env,
    })
}

/// Print status lines and, when asked, per-rule detail
pub fn print_report(report: &BatchReport, verbose_rules: bool) {
    for file in &report.files {
        println!("{file}");
        if verbose_rules {
            for record in &file.records {
                println!("    {}: {}", record.rule, record.status);
            }
        }
    }
}

/// Fail the command if any file could not be processed
pub fn finish(report: &BatchReport) -> Result<()> {
    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} file(s) could not be processed", failed);
    }
    Ok(())
}
