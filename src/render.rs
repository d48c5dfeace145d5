use crate::cli_options::DumpFormat;
use anyhow::{Context, Result};
use std::io::Write;
use tetris_stack_core::session::SessionSnapshot;

pub fn write_state<W: Write>(
    out: &mut W,
    format: DumpFormat,
    snapshot: &SessionSnapshot,
) -> Result<()> {
    match format {
        DumpFormat::Text => write_text(out, snapshot),
        DumpFormat::Json => write_json(out, snapshot),
    }
}

pub fn write_text<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> Result<()> {
    writeln!(out, "\n===== UPCOMING PIECES =====")?;
    for view in &snapshot.queue {
        writeln!(out, "Pos {} | {}", view.slot, view.piece)?;
    }
    writeln!(out, "===========================")?;

    writeln!(out, "\n===== RESERVE =====")?;
    if snapshot.reserve.is_empty() {
        writeln!(out, "Empty reserve.")?;
    }
    for view in &snapshot.reserve {
        writeln!(out, "Top {} | {}", view.slot, view.piece)?;
    }
    writeln!(out, "===================")?;
    Ok(())
}

/// One snapshot object per line.
pub fn write_json<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot).context("serializing snapshot")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tetris_stack_core::piece::{Piece, Shape};
    use tetris_stack_core::session::SlotView;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            queue: vec![
                SlotView {
                    slot: 3,
                    piece: Piece::new(17, Shape::T),
                },
                SlotView {
                    slot: 4,
                    piece: Piece::new(880, Shape::I),
                },
            ],
            reserve: vec![],
        }
    }

    #[test]
    fn test_text_dump() -> Result<()> {
        let mut out = vec![];
        write_text(&mut out, &snapshot())?;
        let text = String::from_utf8(out)?;
        assert_eq!(
            text,
            "\n===== UPCOMING PIECES =====\n\
             Pos 3 | ID: 17 | Tipo: T\n\
             Pos 4 | ID: 880 | Tipo: I\n\
             ===========================\n\
             \n===== RESERVE =====\n\
             Empty reserve.\n\
             ===================\n"
        );
        Ok(())
    }

    #[test]
    fn test_text_dump_reserve_lines() -> Result<()> {
        let mut snap = snapshot();
        snap.reserve = vec![
            SlotView {
                slot: 1,
                piece: Piece::new(5, Shape::Z),
            },
            SlotView {
                slot: 0,
                piece: Piece::new(6, Shape::O),
            },
        ];
        let mut out = vec![];
        write_state(&mut out, DumpFormat::Text, &snap)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Top 1 | ID: 5 | Tipo: Z\nTop 0 | ID: 6 | Tipo: O\n"));
        assert!(!text.contains("Empty reserve."));
        Ok(())
    }

    #[test]
    fn test_json_dump() -> Result<()> {
        let mut out = vec![];
        write_state(&mut out, DumpFormat::Json, &snapshot())?;
        let text = String::from_utf8(out)?;
        assert_eq!(
            text,
            "{\"queue\":[{\"slot\":3,\"id\":17,\"shape\":\"T\"},{\"slot\":4,\"id\":880,\"shape\":\"I\"}],\"reserve\":[]}\n"
        );
        let parsed: SessionSnapshot = serde_json::from_str(text.trim_end())?;
        assert_eq!(parsed, snapshot());
        Ok(())
    }
}
