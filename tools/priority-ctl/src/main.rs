//! priority-ctl: inspect and set priority-level annotations on manifests

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use object_priority::{AccessorConfig, PriorityAccessor};
use priority_ctl::{check, get, init_logging, set, LogConfig, Manifest};

/// priority-ctl: priority-level annotation tool
#[derive(Parser, Debug)]
#[command(name = "priority-ctl")]
#[command(about = "Inspect and set config.kubernetes.io/priority-level annotations")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each object's effective priority and where it came from
    Get {
        /// Manifest file (`-` for stdin)
        file: PathBuf,

        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate every priority annotation
    Check {
        /// Manifest file (`-` for stdin)
        file: PathBuf,
    },
    /// Set the priority annotation on every object
    Set {
        /// Manifest file (`-` for stdin)
        file: PathBuf,

        /// Priority level to write
        priority: u64,

        /// Reject priorities above the maximum instead of writing them
        #[arg(long)]
        strict: bool,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env().with_verbosity(cli.verbose);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: {e}");
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    let config = AccessorConfig::from_env();

    match command {
        Command::Get { file, json } => {
            let manifest = load(&file)?;
            let accessor = PriorityAccessor::with_config(config);
            let reports = get(&manifest, &accessor)?;

            let mut stdout = std::io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &reports)?;
                writeln!(stdout)?;
            } else {
                for report in &reports {
                    writeln!(stdout, "{report}")?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => {
            let manifest = load(&file)?;
            let accessor = PriorityAccessor::with_config(config);
            let invalid = check(&manifest, &accessor);

            if invalid.is_empty() {
                debug!(objects = manifest.objects().len(), "all priorities valid");
                return Ok(ExitCode::SUCCESS);
            }
            for object in &invalid {
                warn!(index = object.index, object = %object.object, "invalid priority annotation");
                eprintln!("{object}");
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Set {
            file,
            priority,
            strict,
            output,
        } => {
            let mut manifest = load(&file)?;
            let config = AccessorConfig {
                strict_writes: strict || config.strict_writes,
            };
            let accessor = PriorityAccessor::with_config(config);
            set(&mut manifest, priority, &accessor)?;

            let rendered = serde_json::to_string_pretty(&manifest.into_value())?;
            match output {
                Some(path) => std::fs::write(&path, format!("{rendered}\n"))
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{rendered}"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(file: &Path) -> Result<Manifest> {
    Manifest::load(file).with_context(|| format!("failed to load manifest {}", file.display()))
}
