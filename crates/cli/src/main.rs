// mechbay CLI - batch pod-mount reconciliation for omni unit files

mod exit_codes;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mechbay_io::{FileCatalog, FileStore};
use mechbay_recon::engine::{omni_chassis, reset_all_pod, run};
use mechbay_recon::ReconConfig;

use exit_codes::{EXIT_CATALOG, EXIT_CONFIG, EXIT_ERROR, EXIT_MISSES, EXIT_SUCCESS, EXIT_USAGE};

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

fn cli_err(code: u8, message: impl Into<String>) -> CliError {
    CliError { code, message: message.into(), hint: None }
}

#[derive(Parser)]
#[command(name = "mechbay")]
#[command(about = "Batch pod-mount reconciliation for omni unit files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile every omni variant against its base chassis
    #[command(after_help = "\
Examples:
  mechbay run data/units
  mechbay run data/units --write
  mechbay run data/units --json > report.json
  mechbay run data/units --config recon.toml --output report.json")]
    Run {
        /// Directory tree of unit files
        dir: PathBuf,

        /// TOML run config (miss exemptions, write-back)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write each reconciled variant back to its source file
        #[arg(long)]
        write: bool,

        /// Output the full report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Mark all eligible equipment on omni units pod-mounted and save
    #[command(after_help = "\
Examples:
  mechbay reset-pods data/units")]
    ResetPods {
        /// Directory tree of unit files
        dir: PathBuf,
    },

    /// List distinct omni chassis names, one per line
    #[command(after_help = "\
Examples:
  mechbay chassis data/units
  mechbay chassis data/units -o chassis.txt")]
    Chassis {
        /// Directory tree of unit files
        dir: PathBuf,

        /// Write the list to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate a run config without reconciling
    Validate {
        /// Path to the TOML config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}

fn dispatch(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Run { dir, config, write, json, output } => {
            cmd_run(dir, config, write, json, output)
        }
        Commands::ResetPods { dir } => cmd_reset_pods(dir),
        Commands::Chassis { dir, output } => cmd_chassis(dir, output),
        Commands::Validate { config } => cmd_validate(config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ReconConfig, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| {
                cli_err(EXIT_USAGE, format!("cannot read {}: {e}", path.display()))
            })?;
            ReconConfig::from_toml(&text).map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))
        }
        None => Ok(ReconConfig::default()),
    }
}

fn scan_catalog(dir: &Path) -> Result<FileCatalog, CliError> {
    let catalog =
        FileCatalog::scan(dir).map_err(|e| cli_err(EXIT_CATALOG, e.to_string()))?;
    for (path, detail) in &catalog.skipped {
        eprintln!("skipping {}: {detail}", path.display());
    }
    Ok(catalog)
}

fn cmd_run(
    dir: PathBuf,
    config_path: Option<PathBuf>,
    write: bool,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut config = load_config(config_path)?;
    if write {
        config.write_back = true;
    }

    let catalog = scan_catalog(&dir)?;
    let report = run(&catalog, &FileStore, &config);

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    for miss in &report.misses {
        eprintln!("{miss}");
    }

    if json || output.is_some() {
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| cli_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
        if let Some(ref path) = output {
            fs::write(path, &json_str).map_err(|e| {
                cli_err(EXIT_ERROR, format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("wrote {}", path.display());
        }
        if json {
            println!("{json_str}");
        }
    }

    // Human summary to stderr
    let s = &report.summary;
    eprintln!(
        "scanned {} units: {} reconciled ({} mounts fixed), {} base records, {} non-omni, {} unresolved, {} load failures",
        s.scanned, s.reconciled, s.promoted, s.base_records, s.non_omni, s.unresolved, s.load_failures,
    );
    eprintln!("total failures to find equipment: {}", s.misses);

    if s.misses > 0 {
        return Err(cli_err(EXIT_MISSES, "missing equipment found"));
    }
    Ok(())
}

fn cmd_reset_pods(dir: PathBuf) -> Result<(), CliError> {
    let catalog = scan_catalog(&dir)?;
    let report = reset_all_pod(&catalog, &FileStore);

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    eprintln!("reset {} of {} scanned units to all-pod", report.reset, report.scanned);
    Ok(())
}

fn cmd_chassis(dir: PathBuf, output: Option<PathBuf>) -> Result<(), CliError> {
    let catalog = scan_catalog(&dir)?;
    let report = omni_chassis(&catalog, &FileStore);

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }

    match output {
        Some(path) => {
            let mut text = String::new();
            for chassis in &report.chassis {
                text.push_str(chassis);
                text.push('\n');
            }
            fs::write(&path, text).map_err(|e| {
                cli_err(EXIT_ERROR, format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("wrote {} chassis names to {}", report.chassis.len(), path.display());
        }
        None => {
            for chassis in &report.chassis {
                println!("{chassis}");
            }
        }
    }
    Ok(())
}

fn cmd_validate(config: PathBuf) -> Result<(), CliError> {
    let text = fs::read_to_string(&config)
        .map_err(|e| cli_err(EXIT_USAGE, format!("cannot read {}: {e}", config.display())))?;
    let parsed =
        ReconConfig::from_toml(&text).map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))?;
    eprintln!(
        "config ok: {} exemption(s), write_back={}",
        parsed.miss_exempt.len(),
        parsed.write_back,
    );
    Ok(())
}
