//! Play command - interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::ConfigArgs,
        input::Command,
        output::print_session,
    },
    session::Session,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

const HELP: &str = "commands: ROW,COL place | p N select piece | j N jump to step | q quit";

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let mut session = Session::new(config)?;

    let stdin = io::stdin();
    run(&mut session, stdin.lock(), io::stdout())
}

/// Drive a session from line-oriented input until `q` or end of input,
/// writing the board, status and prompts to `out`.
pub fn run(session: &mut Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{HELP}")?;
    print_session(&mut out, session)?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}\n{HELP}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        // Rejected moves leave the session unchanged; report and carry on.
        if let Err(err) = command.apply(session) {
            writeln!(out, "ignored: {err}")?;
        }
        print_session(&mut out, session)?;
        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}
