//! adoc CLI: stage a work order into transfer packages, or validate a source location.

use anyhow::Result;
use adoc::engine::arg_parser::Cli;
use adoc::engine::handle_run;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
