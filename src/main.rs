//! mustup-opus command-line front end
//!
//! Prints tup rules converting `.wave` sources to Ogg Opus.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mustup_opus::discovery::{plan_directory, plan_source, SourceFile};
use mustup_opus::metadata::Metadata;
use mustup_opus::{logging, render_tupfile, EncoderSettings, FormatRegistry};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Encoder settings file (defaults to <config dir>/mustup/opus.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the rule for a single source file
    Rule {
        /// Source audio file
        source: PathBuf,

        /// Metadata JSON file (defaults to the <basename>.json sidecar)
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Print the rule as JSON instead of a tup rule line
        #[arg(long)]
        json: bool,
    },
    /// Print a Tupfile body covering every source in a directory
    Tupfile {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// List registered formats and the extensions they claim
    Formats,
}

fn load_settings(config: Option<&Path>) -> Result<EncoderSettings, String> {
    match config {
        Some(path) => EncoderSettings::load_from(path),
        None => Ok(EncoderSettings::load()),
    }
}

fn print_rule(
    registry: &FormatRegistry,
    source: &Path,
    metadata: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let source = SourceFile::from_path(source)
        .ok_or_else(|| format!("Invalid source file name: {}", source.display()))?;

    let rule = match metadata {
        Some(metadata_path) => {
            let format = registry
                .for_path(&source.path)
                .ok_or_else(|| format!("No format claims {}", source.path.display()))?;
            let metadata = Metadata::load(metadata_path)?;
            format.process(&metadata, &source.basename, &source.name, &[])?
        }
        None => plan_source(&source, registry)?,
    };

    if json {
        let out = serde_json::to_string_pretty(&rule)
            .map_err(|e| format!("Failed to serialize rule: {}", e))?;
        println!("{}", out);
    } else {
        println!("{}", rule.to_tup());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    let settings = load_settings(cli.config.as_deref())?;
    let registry = FormatRegistry::with_defaults(&settings);

    match cli.command {
        Command::Rule {
            source,
            metadata,
            json,
        } => print_rule(&registry, &source, metadata.as_deref(), json),
        Command::Tupfile { dir } => {
            let rules = plan_directory(&dir, &registry)?;
            log::info!("Planned {} rule(s) for {}", rules.len(), dir.display());
            print!("{}", render_tupfile(&rules));
            Ok(())
        }
        Command::Formats => {
            for format in registry.formats() {
                println!("{}\t.{}", format.name(), format.supported_extensions().join(" ."));
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
