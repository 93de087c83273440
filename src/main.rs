use anyhow::Result;
use clap::Parser;
use dispatch_bench::cli::{execute_run, Cli, RunOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute_run(RunOptions::from(&cli))?;
    Ok(())
}
