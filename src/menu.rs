use crate::cli_options::DumpFormat;
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tetris_stack_core::bounded_stack::StackError;
use tetris_stack_core::piece_source::PieceSource;
use tetris_stack_core::session::{Action, Outcome, Session};
use tracing::debug;

pub const MENU: &str = "\n============== TETRIS STACK ==============\n\
                        1 - Play piece\n\
                        2 - Reserve piece\n\
                        3 - Use reserved piece\n\
                        0 - Quit\n\
                        Choice: ";

/// Read choices until `0` or end of input, dumping the state after every one of them.
pub fn run<S, R, W>(
    session: &mut Session<S>,
    input: R,
    out: &mut W,
    format: DumpFormat,
) -> Result<()>
where
    S: PieceSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        out.write_all(MENU.as_bytes())?;
        out.flush()?;

        let action = match lines.next() {
            None => Ok(Action::Quit),
            Some(line) => line.context("reading menu choice")?.parse::<Action>(),
        };

        let quit = match action {
            Ok(action) => {
                let outcome = session.apply(action);
                write_outcome(out, &outcome)?;
                outcome == Outcome::Quit
            }
            Err(e) => {
                debug!(%e, "rejected menu input");
                writeln!(out, "\nInvalid option!")?;
                false
            }
        };

        render::write_state(out, format, &session.snapshot())?;
        if quit {
            return Ok(());
        }
    }
}

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Played(d) => {
            if d.is_recovered() {
                writeln!(out, "\nQueue was empty! Generated a new piece...")?;
            }
            writeln!(out, "\nYou played the piece from the queue: {}", d.piece())?;
        }
        Outcome::Reserved(d) => {
            if d.is_recovered() {
                writeln!(out, "\nQueue was empty! Generated a new piece...")?;
            }
            writeln!(out, "\nReserved piece: {}", d.piece())?;
        }
        Outcome::UsedReserved(piece) => {
            writeln!(out, "\nUsed reserved piece: {}", piece)?;
        }
        Outcome::Refused(StackError::Full { .. }) => {
            writeln!(out, "\nReserve is full! Cannot reserve more pieces.")?;
        }
        Outcome::Refused(StackError::Empty) => {
            writeln!(out, "\nReserve is empty! There are no reserved pieces.")?;
        }
        Outcome::Quit => {
            writeln!(out, "\nQuitting...")?;
        }
    }
    Ok(())
}
