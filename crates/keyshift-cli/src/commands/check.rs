use std::path::PathBuf;

use anyhow::Result;
use keyshift_engine::{Batch, Mode, Pipeline};

use super::{finish, plan, print_report};

pub fn handle(paths: Vec<PathBuf>, config: Option<PathBuf>, diff: bool) -> Result<()> {
    let plan = plan(paths, config)?;
    let batch = Batch::new(Pipeline::standard(&plan.env), Mode::Check).with_diff(diff);

    let report = batch.run(&plan.targets);
    print_report(&report, false);

    for file in &report.files {
        if let Some(diff) = &file.diff {
            println!();
            print!("{diff}");
        }
    }

    println!();
    println!(
        "{} file(s) would be updated, {} skipped",
        report.updated_count(),
        report.skipped_count()
    );

    finish(&report)
}
