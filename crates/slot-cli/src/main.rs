//! `meetslot` CLI — find common free time between two calendars.
//!
//! ## Usage
//!
//! ```sh
//! # Five-line text request (stdin → stdout)
//! meetslot find < input.txt
//!
//! # From file to file
//! meetslot find -i input.txt -o output.txt
//!
//! # JSON in, JSON out
//! meetslot find --input-format json --output-format json -i request.json
//!
//! # Apply the minimum duration to every slot, including the first and last
//! meetslot find --uniform-min-duration -i input.txt
//!
//! # Show the combined busy calendar
//! meetslot busy -i input.txt
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to trace the pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::{DurationPolicy, MeetingRequest};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Find common free meeting slots between two calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free slots common to both calendars
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Request format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        input_format: Format,
        /// Result format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        output_format: Format,
        /// Enforce the minimum duration on leading and trailing slots too
        #[arg(long)]
        uniform_min_duration: bool,
    },
    /// Print the merged busy calendar of both people
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Request format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        input_format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Bracketed list of quoted H:MM pairs
    Text,
    /// JSON document
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            input_format,
            output_format,
            uniform_min_duration,
        } => {
            let request = read_request(input.as_deref(), input_format)?;
            let policy = if uniform_min_duration {
                DurationPolicy::Uniform
            } else {
                DurationPolicy::Reference
            };

            let slots = slot_engine::find_common_slots(&request, policy)
                .context("Failed to compute free slots")?;
            info!(count = slots.len(), "computed free slots");

            let rendered = match output_format {
                Format::Text => slot_engine::format_slots(&slots),
                Format::Json => {
                    slot_engine::slots_to_json(&slots).context("Failed to encode slots as JSON")?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            input_format,
        } => {
            let request = read_request(input.as_deref(), input_format)?;
            let busy =
                slot_engine::common_busy(&request).context("Failed to merge busy calendars")?;
            println!("{}", slot_engine::format_intervals(&busy));
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_request(path: Option<&str>, format: Format) -> Result<MeetingRequest> {
    let raw = read_input(path)?;
    let request = match format {
        Format::Text => slot_engine::parse_request(&raw),
        Format::Json => slot_engine::parse_json_request(&raw),
    }
    .context("Failed to parse request")?;
    info!(
        busy1 = request.calendar1.len(),
        busy2 = request.calendar2.len(),
        minutes = request.minutes,
        "parsed request"
    );
    Ok(request)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
