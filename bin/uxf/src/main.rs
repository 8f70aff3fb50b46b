//! ---
//! uxf_section: "03-command-line"
//! uxf_subsection: "binary"
//! uxf_type: "source"
//! uxf_scope: "code"
//! uxf_description: "Command line entrypoint for the uxf tool."
//! uxf_version: "v0.1.0"
//! uxf_owner: "tbd"
//! ---
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use uxf_common::config::{LoadedUxfConfig, UxfConfig};
use uxf_common::logging::init_tracing;

mod commands;

const VERBOSE_DIRECTIVE: &str = "debug";

#[derive(Debug, Parser)]
#[command(
    name = "uxf",
    author,
    disable_version_flag = true,
    about = "Uniform eXchange Format version reporter",
    long_about = None
)]
struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Enable debug logging on stderr, overriding UXF_LOG and RUST_LOG"
    )]
    verbose: bool,

    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the greeting (default)")]
    Hello,
    #[command(about = "Print the embedded version")]
    Version(commands::RenderOptions),
    #[command(about = "Print version and build metadata")]
    Info(commands::RenderOptions),
    #[command(about = "Validate the embedded version")]
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    if cli.version {
        return commands::long_version(&mut out);
    }

    let LoadedUxfConfig { config, source } = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging, cli.verbose.then_some(VERBOSE_DIRECTIVE))?;
    debug!(source = ?source, "configuration resolved");

    let output = config.output.format;
    match cli.command.unwrap_or(Commands::Hello) {
        Commands::Hello => commands::hello(&mut out),
        Commands::Version(opts) => commands::version(&mut out, opts.format(output)),
        Commands::Info(opts) => commands::info(&mut out, opts.format(output)),
        Commands::Check => commands::check(&mut out),
    }
}

/// An explicit `--config` beats `UXF_CONFIG` and the working-directory file.
fn load_config(explicit: Option<&Path>) -> Result<LoadedUxfConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("config file {} does not exist", path.display()));
            }
            Ok(LoadedUxfConfig {
                config: UxfConfig::from_path(path)?,
                source: Some(path.to_path_buf()),
            })
        }
        None => UxfConfig::load_with_source(&[PathBuf::from(UxfConfig::DEFAULT_FILE_NAME)]),
    }
}
