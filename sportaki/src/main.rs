use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sportaki::core::{Conversion, FieldMap, SourceRange};
use sportaki::parser::{find_blocks, parse_fields};
use sportaki::pending::render_pending;
use sportaki::storage::{FsStore, ScheduleStore, decode_text};
use sportaki::{Event, convert, convert_checked};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sportaki",
    about = "Convert `{ key: value }` schedule blocks into PHP array lines",
    version
)]
struct Cli {
    /// Enable verbose logging for debugging.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a schedule and write the PHP lines.
    Convert(ConvertArgs),

    /// List events whose link is still pending.
    Pending(PendingArgs),

    /// Show every block with the fields parsed from it.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Schedule text file; stdin when omitted or `-`.
    input: Option<PathBuf>,
    /// Write the converted lines to this path instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Write the pending report to this path instead of stderr.
    #[arg(long)]
    pending_out: Option<PathBuf>,
    /// Emit the whole conversion (output and pending entries) as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct PendingArgs {
    /// Schedule text file; stdin when omitted or `-`.
    input: Option<PathBuf>,
    /// Emit JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Schedule text file; stdin when omitted or `-`.
    input: Option<PathBuf>,
    /// Emit JSON instead of a debug representation.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = FsStore;
    match cli.command {
        Commands::Convert(args) => handle_convert(args, &store),
        Commands::Pending(args) => handle_pending(args, &store),
        Commands::Inspect(args) => handle_inspect(args, &store),
    }
}

/// Logs go to stderr; stdout carries converted output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_convert(args: ConvertArgs, store: &impl ScheduleStore) -> Result<()> {
    let ConvertArgs {
        input,
        output,
        pending_out,
        json,
    } = args;

    let raw = read_input(input.as_deref(), store)?;
    let conversion = convert_checked(&raw).context("converting schedule")?;
    info!(
        events = conversion.event_count,
        pending = conversion.pending.len(),
        "converted schedule"
    );

    let text = if json {
        let mut json = serde_json::to_string_pretty(&conversion)?;
        json.push('\n');
        json
    } else {
        conversion.to_file_text()
    };
    write_output(output.as_deref(), &text, store)?;

    if !json {
        write_pending(&conversion, pending_out.as_deref(), store)?;
    }
    Ok(())
}

fn handle_pending(args: PendingArgs, store: &impl ScheduleStore) -> Result<()> {
    let PendingArgs { input, json } = args;
    let raw = read_input(input.as_deref(), store)?;
    let conversion = convert(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion.pending)?);
    } else {
        println!("{}", render_pending(&conversion.pending));
    }
    Ok(())
}

fn handle_inspect(args: InspectArgs, store: &impl ScheduleStore) -> Result<()> {
    let InspectArgs { input, json } = args;
    let raw = read_input(input.as_deref(), store)?;
    let report = inspect_blocks(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for block in &report {
            println!("{:#?}", block);
        }
        if report.is_empty() {
            eprintln!("No `{{ ... }}` blocks found.");
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct InspectedBlock {
    range: SourceRange,
    fields: FieldMap,
    accepted: bool,
    pending: bool,
}

fn inspect_blocks(raw: &str) -> Vec<InspectedBlock> {
    find_blocks(raw)
        .into_iter()
        .map(|block| {
            let fields = parse_fields(block.body);
            let event = Event::from_fields(fields.clone());
            InspectedBlock {
                range: block.range,
                accepted: event.is_some(),
                pending: event.as_ref().is_some_and(Event::is_pending),
                fields,
            }
        })
        .collect()
}

fn read_input(input: Option<&Path>, store: &impl ScheduleStore) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading {:?}", path);
            store.open(path)
        }
        _ => {
            debug!("Reading stdin");
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
            Ok(decode_text(&bytes))
        }
    }
}

fn write_output(output: Option<&Path>, text: &str, store: &impl ScheduleStore) -> Result<()> {
    match output {
        Some(path) => {
            store.save(path, text)?;
            println!("Saved {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn write_pending(
    conversion: &Conversion,
    pending_out: Option<&Path>,
    store: &impl ScheduleStore,
) -> Result<()> {
    let mut report = render_pending(&conversion.pending);
    report.push('\n');
    match pending_out {
        Some(path) => store.save(path, &report),
        None => {
            eprint!("{report}");
            Ok(())
        }
    }
}
