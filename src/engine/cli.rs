//! CLI command handler: merge adoc.toml with flags, set up logging, dispatch.

use anyhow::Result;
use std::time::Duration;

use crate::Opts;
use crate::engine::arg_parser::{Cli, Commands};
use crate::engine::handlers::{handle_stage, handle_validate};
use crate::utils::adoc_toml::{apply_file_to_opts, load_adoc_toml};
use crate::utils::setup_logging;

/// Defaults, then config file, then flags.
pub fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_adoc_toml(cli.config.as_deref()) {
        apply_file_to_opts(&file, &mut opts);
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(p) = &cli.log_file {
        opts.log_file = Some(p.clone());
    }
    let source = match &cli.command {
        Commands::Stage(args) => {
            if let Some(p) = &args.staging {
                opts.staging = Some(p.clone());
            }
            if let Some(n) = args.workers {
                opts.workers = Some(n);
            }
            if let Some(p) = &args.report_dir {
                opts.report_dir = Some(p.clone());
            }
            if let Some(secs) = args.collect_timeout {
                opts.collect_timeout = Some(Duration::from_secs(secs));
            }
            &args.source
        }
        Commands::Validate(args) => args,
    };
    if let Some(p) = &source.source {
        opts.source = Some(p.clone());
    }
    opts
}

/// Run the selected command.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    setup_logging(opts.verbose, opts.log_file.as_deref())?;
    log::debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    match &cli.command {
        Commands::Stage(_) => handle_stage(&opts),
        Commands::Validate(_) => handle_validate(&opts),
    }
}
