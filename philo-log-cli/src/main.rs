//! Philosophers Log CLI Application
//!
//! This is the command-line interface for the philosophers log visualizer.
//! It uses the philo-log-decoder library and adds:
//! - Log acquisition (stdin pipe, file, or running the simulator)
//! - Saving the raw simulation log
//! - Per-philosopher summary and timeline reports (TXT/HTML/JSON)

use anyhow::{bail, Context, Result};
use clap::Parser;
use philo_log_decoder::{Decoder, DecoderConfig};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod config;
mod input;
mod report;
mod simulation;

use config::{AppConfig, OutputFormat};
use report::ReportContext;

/// Philosophers log visualizer - timelines and statistics of a simulation
#[derive(Parser, Debug)]
#[command(name = "philo-log-cli")]
#[command(about = "Visualize the progress of a dining philosophers simulation", long_about = None)]
#[command(version)]
struct Args {
    /// Read the simulation output from a pipe (stdin)
    #[arg(short = 'P', long = "pipe")]
    from_pipe: bool,

    /// Read the simulation output from a file
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Simulator binary to run when no pipe or log file is given
    #[arg(long, value_name = "PATH")]
    philo_bin: Option<PathBuf>,

    /// Number of philosophers in the simulation
    #[arg(long, value_name = "N")]
    philos: Option<u32>,

    /// Time to die (ms)
    #[arg(long, value_name = "MS")]
    time_to_die: Option<u64>,

    /// Time to eat (ms)
    #[arg(long, value_name = "MS")]
    time_to_eat: Option<u64>,

    /// Time to sleep (ms)
    #[arg(long, value_name = "MS")]
    time_to_sleep: Option<u64>,

    /// Limit of meals (no limit by default)
    #[arg(long, value_name = "COUNT")]
    meals: Option<u32>,

    /// Kill the simulator after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Save simulation output to a file
    #[arg(short, long)]
    save: bool,

    /// Disable the timeline legend
    #[arg(long)]
    legend_off: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only print per-philosopher counts, skip the timeline
    #[arg(long)]
    summary_only: bool,

    /// Pass unknown actions through and keep events logged after a death
    #[arg(long)]
    lenient: bool,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Philosophers Log CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", philo_log_decoder::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    let config = apply_args(config, &args);

    let mut stdout = io::stdout().lock();
    run(&config, args.summary_only, &mut stdout)
}

/// Command-line flags take precedence over the config file
fn apply_args(mut config: AppConfig, args: &Args) -> AppConfig {
    config.input.from_pipe |= args.from_pipe;
    config.input.save |= args.save;
    if args.log.is_some() {
        config.input.log_file = args.log.clone();
    }

    let sim = &mut config.simulation;
    if args.philo_bin.is_some() {
        sim.binary = args.philo_bin.clone();
    }
    sim.philosophers = args.philos.unwrap_or(sim.philosophers);
    sim.time_to_die = args.time_to_die.unwrap_or(sim.time_to_die);
    sim.time_to_eat = args.time_to_eat.unwrap_or(sim.time_to_eat);
    sim.time_to_sleep = args.time_to_sleep.unwrap_or(sim.time_to_sleep);
    sim.max_meals = args.meals.or(sim.max_meals);
    sim.timeout_secs = args.timeout_secs.unwrap_or(sim.timeout_secs);

    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.output.is_some() {
        config.output.path = args.output.clone();
    }
    if args.legend_off {
        config.output.legend = false;
    }

    if args.lenient {
        config.decoder = DecoderConfig::lenient()
            .with_escaped_newline_stripping(config.decoder.strip_escaped_newlines);
    }
    config
}

/// Decode the log and write the report to the configured file, else to `out`
///
/// Status messages go to stderr so `out` only ever carries the report.
fn run(config: &AppConfig, summary_only: bool, out: &mut dyn Write) -> Result<()> {
    let uid = uuid::Uuid::new_v4().to_string();

    let lines = acquire_lines(config)?;

    eprintln!("Current simulation UID: {}", uid);
    if config.input.save {
        let dir = config
            .output
            .save_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = input::save_raw_log(&lines, &dir, &uid)?;
        eprintln!("Log of the simulation saved in {:?}", path);
    }

    let decoder = Decoder::with_config(config.decoder.clone());

    let rendered = if summary_only {
        let summary = decoder.summarize_lines(&lines)?;
        report::txt::render_summary(&summary)
    } else {
        let log = decoder.decode_lines(&lines)?;
        let ctx = ReportContext::new(uid.as_str(), config.output.legend);
        report::render(config.output.format, &log, &ctx)?
    };

    write_report(&rendered, config.output.path.as_deref(), out)
}

/// Pick the log source: pipe, then log file, then the simulator
fn acquire_lines(config: &AppConfig) -> Result<Vec<String>> {
    if config.input.from_pipe {
        return input::read_stdin();
    }
    if let Some(path) = &config.input.log_file {
        return input::read_file(path);
    }
    if let Some(binary) = &config.simulation.binary {
        return Ok(simulation::run(binary, &config.simulation));
    }
    bail!(
        "No input specified\n\nQuick Start:\n  ./philo 5 800 200 200 | philo-log-cli -P\n  philo-log-cli --log philo.log\n  philo-log-cli --philo-bin ./philo --philos 4 --time-to-die 410\n\nUse --help for more options"
    )
}

fn write_report(rendered: &str, path: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
