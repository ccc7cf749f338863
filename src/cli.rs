//! CLI definitions and entry point

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;

use yardstick::checks;
use yardstick::config::{self, Config, Overrides, Settings};
use yardstick::core::services::Runner;
use yardstick::output::{self, OutputFormat};

/// Exit code for policy violations and aborting errors
pub const FAILURE_EXIT: u8 = 2;

/// yardstick - Repository hygiene checks
#[derive(Parser, Debug)]
#[command(
    name = "yardstick",
    version,
    about = "Repository hygiene checks",
    long_about = "Check a repository for the files and conventions it is expected to have.\n\n\
                  Findings are reported per check with guidance on why each matters\n\
                  and how to resolve it. Analysis is read-only unless --fix is given."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path to scan
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output format: table or json
    #[arg(long)]
    pub format: Option<String>,

    /// Comma-separated list of checks to run (empty means all)
    #[arg(long)]
    pub only: Option<String>,

    /// Exit nonzero if any warn-level finding exists
    #[arg(long)]
    pub strict: bool,

    /// Create missing starter files where a check supports it
    #[arg(long)]
    pub fix: bool,

    /// List available checks and exit
    #[arg(long)]
    pub list: bool,

    /// Ignore user and project config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format.clone(),
            strict: self.strict,
            only: self.only.clone(),
            fix: self.fix,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let registry = checks::builtin()?;

    if cli.list {
        let mut out = io::stdout().lock();
        output::render_list(&registry.descriptors(), &mut out)?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("cannot access {}", cli.path.display()))?;
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let file_config = if cli.no_config {
        Config::default()
    } else {
        Config::discover(&root, config::global_config_path().as_deref())?
    };
    let settings = Settings::resolve(cli.overrides(), file_config)?;
    log::debug!("scanning {} with {settings:?}", root.display());

    let report = Runner::new(&registry)
        .options(settings.check_options())
        .selection(settings.selection.clone())
        .run(&root)?;

    let stdout = io::stdout();
    let color = settings.format == OutputFormat::Table
        && stdout.is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let mut out = stdout.lock();
    settings.format.render(&report, &mut out, color)?;
    out.flush()?;

    if report.violates_policy(settings.strict) {
        eprintln!("yardstick: policy violations found");
        return Ok(ExitCode::from(FAILURE_EXIT));
    }
    Ok(ExitCode::SUCCESS)
}
