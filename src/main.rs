use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use class_map_tools::cli::Cli;
use class_map_tools::utils::logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_config.as_deref())?;
    cli.run()
}
