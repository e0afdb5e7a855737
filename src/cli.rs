use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use crate::class::{CheckStatus, ClassMapWriter, ExportScanner};
use crate::config::ToolConfig;
use crate::rewrite::{AllowList, ForwardDeclRewriter};

/// Maintenance passes over the framework sources
#[derive(Parser, Debug)]
#[command(name = "classmap", about = "Generate the exported class map and rewrite forward declarations", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (.toml, .yaml or .yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log per-component and per-file details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// log4rs YAML configuration replacing the console logger
    #[arg(long, global = true)]
    pub log_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan component headers and write the class map header
    Scan(ScanArgs),

    /// Replace forward declarations of framework classes with includes
    Rewrite(RewriteArgs),
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory holding one subdirectory per component
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path of the generated header
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only check whether the generated header is up to date
    #[arg(long)]
    pub check: bool,

    /// Print the class map as JSON instead of writing the header
    #[arg(long, conflicts_with = "check")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Directory to rewrite recursively
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Report replacements without modifying files
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Load the configuration and run the selected pass
    pub fn run(self) -> Result<ExitCode> {
        let config = ToolConfig::load_or_default(self.config.as_deref())?;

        match self.command {
            Commands::Scan(args) => run_scan(config, args),
            Commands::Rewrite(args) => run_rewrite(config, args),
        }
    }
}

/// Generate (or check) the class map header
pub fn run_scan(mut config: ToolConfig, args: ScanArgs) -> Result<ExitCode> {
    if let Some(root) = args.root {
        config.source_root = root;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    config.validate_scan()?;

    let writer = ClassMapWriter::from_config(&config);
    let map = ExportScanner::new(config).scan_all()?;

    // Stdout carries only the JSON document
    if args.json {
        println!("{}", writer.render_json(&map)?);
        return Ok(ExitCode::SUCCESS);
    }

    if args.check {
        return Ok(match writer.check(&map)? {
            CheckStatus::UpToDate => {
                info!("{} is up to date", writer.output().display());
                ExitCode::SUCCESS
            }
            CheckStatus::Stale => {
                warn!("{} is out of date", writer.output().display());
                ExitCode::FAILURE
            }
            CheckStatus::Missing => {
                warn!("{} does not exist", writer.output().display());
                ExitCode::FAILURE
            }
        });
    }

    writer.write(&map)?;
    Ok(ExitCode::SUCCESS)
}

/// Rewrite forward declarations below the requested root
pub fn run_rewrite(config: ToolConfig, args: RewriteArgs) -> Result<ExitCode> {
    config.validate_rewrite()?;

    let allow_list = AllowList::load_or_builtin(config.rewrite.allow_list_file.as_deref())?;
    let rewriter = ForwardDeclRewriter::new(&allow_list, config.rewrite.extensions.clone())?
        .sorted(config.sorted_walk)
        .dry_run(args.dry_run);

    rewriter.rewrite_tree(&args.root)?;
    Ok(ExitCode::SUCCESS)
}
