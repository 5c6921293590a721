use std::path::PathBuf;

use anyhow::Result;
use keyshift_engine::{Batch, Mode, Pipeline, trailer};

use super::{finish, plan, print_report};

pub fn handle(paths: Vec<PathBuf>, config: Option<PathBuf>, verbose_rules: bool) -> Result<()> {
    let plan = plan(paths, config)?;
    let batch = Batch::new(Pipeline::standard(&plan.env), Mode::Apply);

    let report = batch.run(&plan.targets);
    print_report(&report, verbose_rules);

    println!();
    print!("{}", trailer(&plan.env));

    finish(&report)
}
