mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use verpatch_lib::manifest::DEFAULT_MANIFEST;
use verpatch_lib::{ListError, VersionReq};

use crate::cmd::{cmd_apply, cmd_highest, cmd_pick, cmd_revert, cmd_versions};
use crate::output::{OutputFormat, print_error};

/// Exit code when a patch fails, as opposed to bad input (1) or usage errors (2).
const PATCH_FAILED: u8 = 3;

/// verpatch - apply and revert versioned patches in semver order
#[derive(Parser)]
#[command(name = "verpatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to the patch manifest
  #[arg(short, long, global = true, default_value = DEFAULT_MANIFEST)]
  file: PathBuf,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short = 'o', long, global = true, value_enum, default_value = "text")]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List patch versions, lowest first
  Versions,

  /// Print the highest patch version
  Highest,

  /// List patch versions matching a constraint
  Pick {
    /// Version constraint, e.g. ">=1.0.0, <2.0.0"
    #[arg(value_parser = VersionReq::parse)]
    constraint: VersionReq,
  },

  /// Apply patches in ascending version order
  Apply {
    /// Only apply versions matching this constraint
    #[arg(short, long, value_parser = VersionReq::parse)]
    range: Option<VersionReq>,

    /// Show what would run without running anything
    #[arg(long)]
    dry_run: bool,
  },

  /// Revert patches in descending version order
  Revert {
    /// Only revert versions matching this constraint
    #[arg(short, long, value_parser = VersionReq::parse)]
    range: Option<VersionReq>,

    /// Show what would run without running anything
    #[arg(long)]
    dry_run: bool,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Versions => cmd_versions(&cli.file, cli.output),
    Commands::Highest => cmd_highest(&cli.file, cli.output),
    Commands::Pick { constraint } => cmd_pick(&cli.file, &constraint, cli.output),
    Commands::Apply { range, dry_run } => cmd_apply(&cli.file, range.as_ref(), dry_run, cli.output),
    Commands::Revert { range, dry_run } => cmd_revert(&cli.file, range.as_ref(), dry_run, cli.output),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&err.to_string());
      let patch_failed = err
        .downcast_ref::<ListError>()
        .and_then(ListError::as_patch_error)
        .is_some();
      if patch_failed {
        ExitCode::from(PATCH_FAILED)
      } else {
        ExitCode::FAILURE
      }
    }
  }
}
