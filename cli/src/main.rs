use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use gridboard::config::{CanvasConfig, ConfigError};
use gridboard::engine::{EngineCore, InputEvent};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid event on line {line}: {source}")]
    Event { line: usize, source: serde_json::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gridboard-cli", about = "Replay input scripts against the gridboard engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a list of input events through a fresh engine.
    Replay {
        #[arg(help = "Event file (JSON array or JSONL), or - for stdin")]
        events: String,

        #[arg(long, env = "GRIDBOARD_CONFIG")]
        config: Option<String>,

        #[arg(long, help = "Override the config seed")]
        seed: Option<u64>,
    },
    /// Parse and validate a config file.
    CheckConfig { file: String },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay { events, config, seed } => run_replay(&events, config.as_deref(), seed),
        Command::CheckConfig { file } => run_check_config(&file),
    }
}

fn run_replay(events_path: &str, config_path: Option<&str>, seed: Option<u64>) -> Result<(), CliError> {
    let mut config = match config_path {
        Some(path) => CanvasConfig::from_json(&read_input(path)?)?,
        None => CanvasConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let events = parse_events(&read_input(events_path)?)?;
    let mut core = EngineCore::try_new(config)?;
    tracing::info!(events = events.len(), "replaying");

    for line in replay(&mut core, &events) {
        println!("{}", serde_json::to_string(&line)?);
    }
    print_json(&final_state(&core))
}

fn run_check_config(path: &str) -> Result<(), CliError> {
    let config = CanvasConfig::from_json(&read_input(path)?)?;
    tracing::info!(path, "config ok");
    print_json(&json!({
        "zoom_min": config.zoom_min,
        "zoom_max": config.zoom_max,
        "zoom_step": config.zoom_step,
        "grid_cell_size": config.grid_cell_size,
        "reset_duration_ms": config.reset_duration_ms,
    }))
}

/// Run every event and collect one `{event, actions}` record per event.
fn replay(core: &mut EngineCore, events: &[InputEvent]) -> Vec<Value> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let actions = core.dispatch(event);
            json!({ "event": i, "actions": actions })
        })
        .collect()
}

fn final_state(core: &EngineCore) -> Value {
    let objects: Vec<_> = core.doc.z_ordered().map(|(_, o)| o).collect();
    json!({
        "zoom": core.viewport.zoom(),
        "offset": core.viewport.offset(),
        "cursor": core.cursor().as_css(),
        "objects": objects,
    })
}

/// Accept either a JSON array of events or one event per line.
fn parse_events(raw: &str) -> Result<Vec<InputEvent>, CliError> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut events = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| CliError::Event { line: i + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let read_err = |source| CliError::Read { path: path.to_owned(), source };
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
