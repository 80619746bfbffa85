//! Enigma command-line tool.
//!
//! Encrypts or decrypts one message with rotors I, II and III. Any setting
//! not given as a flag or environment variable is asked for on stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enigma::keysheet::{parse_plugboard, parse_settings};
use enigma::{EnigmaMachine, MachineConfig};

/// Rotor order used by the tool.
const ROTOR_ORDER: [i64; 3] = [0, 1, 2];

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Encrypt or decrypt a message on a three-rotor Enigma", long_about = None)]
#[command(version)]
struct Cli {
    /// Message to process
    #[arg(short, long, env = "ENIGMA_MESSAGE")]
    message: Option<String>,

    /// Rotor start positions, e.g. "0 0 0"
    #[arg(short, long, env = "ENIGMA_POSITIONS")]
    positions: Option<String>,

    /// Ring settings, e.g. "0 0 0"
    #[arg(short, long, env = "ENIGMA_RINGS")]
    rings: Option<String>,

    /// Plugboard pairs, e.g. "AB CD"
    #[arg(short = 'b', long, env = "ENIGMA_PLUGBOARD")]
    plugboard: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();

    match run(cli) {
        Ok(output) => {
            println!("Output: {output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let message = value_or_prompt(cli.message, "Enter message: ")?;
    let positions = value_or_prompt(cli.positions, "Rotor positions (e.g. 0 0 0): ")?;
    let positions = parse_settings(&positions).context("rotor positions")?;
    let rings = value_or_prompt(cli.rings, "Ring settings (e.g. 0 0 0): ")?;
    let rings = parse_settings(&rings).context("ring settings")?;
    let plugboard = value_or_prompt(cli.plugboard, "Plugboard pairs (e.g. AB CD): ")?;

    let config = MachineConfig::new(&ROTOR_ORDER, &positions, &rings, &parse_plugboard(&plugboard));
    let mut machine = EnigmaMachine::new(&config)?;
    Ok(machine.process(&message))
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
