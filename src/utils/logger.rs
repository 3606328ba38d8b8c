use anyhow::{Context, Result};
use colored::Colorize;
use env_logger::{Builder, Target};
use log::Level;
use std::io::Write;
use std::path::Path;

/// Initialise env_logger once. Our crate logs at Info (Debug when `verbose`), dependencies at Warn.
/// With `log_file`, records go to that file (created or truncated) without colour codes.
pub fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use log::LevelFilter;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = Builder::from_default_env();
    builder
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level); // Our crate: use requested level

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        colored::control::set_override(false);
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init()
        .context("initialise logger")?;
    Ok(())
}
