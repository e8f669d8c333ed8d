use anyhow::{Context, Result};
use clap::Parser;
use shapes::scan::{analyze, Outcome};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod output;

#[derive(Parser, Debug)]
#[command(name = "shapes")]
#[command(about = "Report the first overlapping pair of shapes, else their total area")]
struct Cmd {
    /// Shape file: one `T` (triangle) or `t` (trapezoid) line per shape
    input: PathBuf,

    /// Write the report here instead of stdout
    output: Option<PathBuf>,

    /// Decimal places for coordinates and areas
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Emit a JSON report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);
    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cmd: &Cmd) -> Result<()> {
    let text = std::fs::read_to_string(&cmd.input)
        .with_context(|| format!("ERROR: Unable to open the file {}", cmd.input.display()))?;
    let shapes = input::parse_shapes(&text).map_err(|err| {
        tracing::warn!(line = err.line(), %err, "input rejected");
        err
    })?;
    tracing::info!(input = %cmd.input.display(), shapes = shapes.len(), "loaded");

    let outcome = analyze(&shapes);
    match outcome {
        Outcome::Overlap { first, second } => tracing::info!(first, second, "overlap"),
        Outcome::TotalArea(area) => tracing::info!(area, "no overlap"),
    }

    let rendered = if cmd.json {
        let mut s = serde_json::to_string_pretty(&output::report(&shapes, outcome))?;
        s.push('\n');
        s
    } else {
        output::text(&shapes, outcome, cmd.precision)
    };
    emit(cmd.output.as_deref(), &rendered)
}

fn emit(out: Option<&Path>, rendered: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("ERROR: Unable to open the file {}", path.display()))
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
