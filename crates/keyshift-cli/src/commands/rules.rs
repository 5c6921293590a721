use anyhow::Result;
use keyshift_core::EnvContract;
use keyshift_engine::Pipeline;

pub fn handle() -> Result<()> {
    let pipeline = Pipeline::standard(&EnvContract::default());

    println!("Rules (applied in order):");
    for (i, rule) in pipeline.rules().iter().enumerate() {
        println!("  {}. {}", i + 1, rule.name());
        println!("     {}", rule.description());
    }

    Ok(())
}
