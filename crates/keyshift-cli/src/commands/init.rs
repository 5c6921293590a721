use anyhow::Result;
use keyshift_config::{Config, PROJECT_FILE};

pub fn handle(force: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;

    if current_dir.join(PROJECT_FILE).exists() && !force {
        anyhow::bail!("{} already exists in current directory (use --force to overwrite)", PROJECT_FILE);
    }

    let config = Config::default();
    let path = config.save(&current_dir)?;

    println!("✓ Created {}", path.display());
    println!("  Targets: {}", config.targets.len());
    println!("  Edit the target list, then run 'keyshift check --diff'");

    Ok(())
}
