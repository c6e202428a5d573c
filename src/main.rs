use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vatrates::core::{VatRatesConfig, VatRatesConfigBuilder};
use vatrates::report::{ReportDriver, WriterSink};

#[derive(Parser, Debug)]
#[command(name = "vatrates")]
#[command(about = "EU VAT rate reports partitioned by a standard-rate threshold", long_about = None)]
#[command(version)]
struct Cli {
    /// Rate table to import (tab-separated by default)
    #[arg(short, long, global = true, env = "VATRATES_INPUT")]
    input: Option<PathBuf>,

    /// Field delimiter of the rate table ("tab" or a single character)
    #[arg(short, long, global = true, value_parser = parse_delimiter)]
    delimiter: Option<char>,

    /// Directory exported reports are written into
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Threshold in locale form, e.g. "20" or "17,5"
    #[arg(short, long, global = true)]
    threshold: Option<String>,

    /// Ask for a threshold on stdin (blank answer keeps the default).
    /// With `run`, asked after the default session; otherwise replaces the threshold
    #[arg(long, global = true, conflicts_with = "threshold")]
    interactive: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every country in file order
    List,
    /// List countries above the threshold without a special regime
    Above {
        /// Highest standard rate first
        #[arg(long)]
        sorted: bool,
    },
    /// Print the above countries and the codes of all others
    Report {
        /// Derive the others by subtraction instead of a single pass
        #[arg(long)]
        two_pass: bool,
    },
    /// Write the report into a file named after the threshold
    Export,
    /// Print every listing and both report shapes, then export (default).
    ///
    /// The session uses the default threshold or `--threshold`. With
    /// `--interactive` a second threshold is then read from stdin, its
    /// one-pass report printed and exported as well.
    Run,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        warn!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let driver = ReportDriver::new(config);

    let store = driver.load().with_context(|| {
        format!("importing {}", driver.config().input_path.display())
    })?;
    info!(
        countries = store.len(),
        path = %driver.config().input_path.display(),
        "imported rate table"
    );

    let command = cli.command.unwrap_or(Commands::Run);
    let threshold = if cli.interactive && !matches!(command, Commands::Run) {
        let answer = prompt_threshold()?;
        driver.resolve_threshold(Some(&answer))?
    } else {
        driver.resolve_threshold(cli.threshold.as_deref())?
    };

    let mut console = WriterSink::new(io::stdout().lock(), "stdout");
    match command {
        Commands::List => driver.print_listing(&driver.list_all(&store)?, &mut console)?,
        Commands::Above { sorted: false } => {
            driver.print_listing(&driver.list_above(&store, threshold)?, &mut console)?
        }
        Commands::Above { sorted: true } => {
            driver.print_listing(&driver.list_above_descending(&store, threshold)?, &mut console)?
        }
        Commands::Report { two_pass } => {
            driver.print_report(&store, threshold, two_pass, &mut console)?
        }
        Commands::Export => {
            let path = driver.export(&store, threshold)?;
            info!(path = %path.display(), "exported report");
        }
        Commands::Run => {
            let path = driver.run_session(&store, threshold, &mut console)?;
            info!(path = %path.display(), %threshold, "exported report");
            if cli.interactive {
                let answer = prompt_threshold()?;
                let chosen = driver.resolve_threshold(Some(&answer))?;
                let path = driver.run_follow_up(&store, chosen, &mut console)?;
                info!(path = %path.display(), threshold = %chosen, "exported report");
            }
        }
    }
    Ok(())
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    if s.eq_ignore_ascii_case("tab") || s == "\\t" {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{s}'")),
    }
}

fn build_config(cli: &Cli) -> Result<VatRatesConfig> {
    let defaults = VatRatesConfig::default();
    let mut builder = VatRatesConfigBuilder::new()
        .input_path(cli.input.clone().unwrap_or(defaults.input_path))
        .output_dir(cli.output_dir.clone().unwrap_or(defaults.output_dir));
    if let Some(delimiter) = cli.delimiter {
        builder = builder.delimiter(delimiter);
    }
    Ok(builder.build()?)
}

fn prompt_threshold() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Zadej výši sazby DPH/VAT, podle které se má filtrovat >> ")?;
    stdout.flush()?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("reading threshold from stdin")?;
    Ok(answer)
}
