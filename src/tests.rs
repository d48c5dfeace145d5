#![cfg(test)]

use crate::cli_options::DumpFormat;
use crate::menu;
use anyhow::Result;
use tetris_stack_core::consts;
use tetris_stack_core::piece::Piece;
use tetris_stack_core::piece_source::RandomPieceSource;
use tetris_stack_core::session::{Session, SessionSnapshot};

use pretty_assertions::assert_eq;

const SEED: u64 = 4242;

fn run_script(script: &str, format: DumpFormat) -> Result<(String, Session<RandomPieceSource>)> {
    let mut session = Session::from_seed(SEED);
    let mut out = vec![];
    menu::run(&mut session, script.as_bytes(), &mut out, format)?;
    Ok((String::from_utf8(out)?, session))
}

#[test]
fn menu_plays_reserves_and_uses() -> Result<()> {
    let p: Vec<Piece> = RandomPieceSource::from_seed(SEED).take(7).collect();

    let (out, session) = run_script("1\n2\n3\n0\n", DumpFormat::Text)?;

    assert!(out.contains(&format!("You played the piece from the queue: {}", p[0])));
    assert!(out.contains(&format!("Reserved piece: {}", p[1])));
    assert!(out.contains(&format!("Used reserved piece: {}", p[1])));
    assert!(out.contains("Quitting..."));

    // menu is shown once per choice, state dumped after each
    assert_eq!(out.matches("1 - Play piece").count(), 4);
    assert_eq!(out.matches("===== UPCOMING PIECES =====").count(), 4);

    assert_eq!(session.queue().len(), consts::QUEUE_CAPACITY);
    assert!(session.reserve_stack().is_empty());
    Ok(())
}

#[test]
fn menu_reports_refusals_and_invalid_input() -> Result<()> {
    let (out, session) = run_script("3\n2\n2\n2\n2\nabc\n7\n0\n", DumpFormat::Text)?;

    assert_eq!(
        out.matches("Reserve is empty! There are no reserved pieces.").count(),
        1
    );
    assert_eq!(
        out.matches("Reserve is full! Cannot reserve more pieces.").count(),
        1
    );
    assert_eq!(out.matches("Invalid option!").count(), 2);
    assert_eq!(session.reserve_stack().len(), consts::STACK_CAPACITY);
    Ok(())
}

#[test]
fn end_of_input_quits() -> Result<()> {
    let (out, _) = run_script("1\n", DumpFormat::Text)?;
    assert!(out.contains("Quitting..."));
    assert_eq!(out.matches("Choice: ").count(), 2);
    Ok(())
}

#[test]
fn json_dumps_follow_session() -> Result<()> {
    let (out, session) = run_script("2\n1\n0\n", DumpFormat::Json)?;

    let dumps: Vec<SessionSnapshot> = out
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    assert_eq!(dumps.len(), 3);
    assert_eq!(dumps[0].reserve.len(), 1);
    assert_eq!(dumps.last(), Some(&session.snapshot()));
    Ok(())
}

#[test]
fn same_seed_same_transcript() -> Result<()> {
    let script = "1\n1\n2\n3\n2\n2\n1\n0\n";
    let (a, _) = run_script(script, DumpFormat::Text)?;
    let (b, _) = run_script(script, DumpFormat::Text)?;
    assert_eq!(a, b);
    Ok(())
}
