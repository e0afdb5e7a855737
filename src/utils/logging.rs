use std::io::Write;
use std::path::Path;
use anyhow::{Result, Context};
use log::{Level, LevelFilter};

/// Install the global logger
///
/// A log4rs YAML file takes precedence when given. Otherwise env_logger
/// writes to stdout, honouring `RUST_LOG` over the `verbose` default.
/// Informational lines are printed bare so progress output reads like
/// plain console messages.
pub fn init_logging(verbose: bool, log_config: Option<&Path>) -> Result<()> {
    if let Some(path) = log_config {
        return log4rs::init_file(path, Default::default())
            .with_context(|| format!("Failed to initialise logging from {}", path.display()));
    }

    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level.as_str()))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .try_init()
        .context("Failed to initialise logging")
}
