//! Terminal host for the live football scoreboard
//!
//! Reads one command per line from stdin (or a script file), applies it to
//! an in-process scoreboard and prints the refreshed summary. Rejected
//! commands print their error and the session carries on.

mod command;
mod session;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scoreboard::{Scoreboard, ScoreboardConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use command::ParseError;
use session::{Session, SessionError, Step};

#[derive(Debug, Parser)]
#[command(name = "scoreboard-demo", version, about = "Live football scoreboard demo")]
struct Args {
    /// JSON scoreboard config (clock, logical_origin)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print summaries as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ScoreboardConfig::from_json_str(&raw)?
        }
        None => ScoreboardConfig::default(),
    };

    info!(clock = ?config.clock, json = args.json, "Starting scoreboard demo");

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(Scoreboard::from_config(&config), args.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Live Football Scoreboard (type 'help' for commands)")?;
    writeln!(out, "{}", session.render_summary()?)?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim_start().starts_with('#') {
            continue;
        }

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Step::Print(text)) => writeln!(out, "{text}")?,
            Ok(Step::Quit) => break,
            Err(SessionError::Scoreboard(err)) => {
                debug!(code = err.code(), "Command rejected");
                writeln!(out, "error: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }
        out.flush()?;
    }

    info!(active_matches = session.board().len(), "Scoreboard demo finished");
    Ok(())
}
