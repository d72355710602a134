//! Replay command - apply a scripted sequence of commands

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::{
    adapters::{EventLog, SessionEvent},
    cli::{config::ConfigArgs, input::Command, output::print_session},
    history::History,
    session::Session,
    status::Status,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a sequence of commands and print the result")]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the history, status and event log as JSON
    #[arg(long)]
    pub json: bool,

    /// Commands: ROW,COL | pN | jN (quote commands containing spaces)
    #[arg(required = true)]
    pub commands: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub status: Status,
    pub history: History,
    pub events: Vec<SessionEvent>,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let report = replay(Session::new(config)?, &args.commands, !args.json)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing replay report")?
        );
    }
    Ok(())
}

/// Apply each command in order. Rejected moves are logged and skipped.
pub fn replay(mut session: Session, commands: &[String], print: bool) -> Result<ReplayReport> {
    let log = EventLog::new();
    session.add_observer(log.clone());

    for raw in commands {
        let command: Command = raw
            .parse()
            .with_context(|| format!("parsing command '{raw}'"))?;
        if command == Command::Quit {
            break;
        }
        if let Err(err) = command.apply(&mut session) {
            warn!(command = %raw, %err, "command ignored");
        }
    }

    if print {
        print_session(&mut io::stdout().lock(), &session).context("writing session")?;
    }

    Ok(ReplayReport {
        status: session.status(),
        history: session.history().clone(),
        events: log.events(),
    })
}
