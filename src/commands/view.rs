use serde::Deserialize;

use super::{Args, Command};
use crate::editable::EditSession;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ScrollArgs {
    amount: i64,
}

/// Scroll the view by whole lines.
///
/// A positive amount reveals lines above the first visible row, a negative
/// one lines below the last visible row. The cursor does not move.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLines;

impl Command for ScrollLines {
    fn run(&self, edit: &mut EditSession<'_>, args: &Args) -> Result<()> {
        let ScrollArgs { amount } = args.parse("scroll_lines")?;
        let buffer = edit.buffer();
        let frontend = edit.frontend();
        let visible = frontend.visible_region(buffer);

        let distance = amount.unsigned_abs() as usize;
        let row = if amount >= 0 {
            let (row, _) = buffer.row_col(visible.begin())?;
            row.saturating_sub(distance)
        } else {
            let (row, _) = buffer.row_col(visible.end())?;
            (row + distance).min(buffer.line_count() - 1)
        };

        let line = buffer.line(buffer.text_point(row, 0))?;
        tracing::debug!("scroll_lines {} → row {}", amount, row);
        frontend.show(buffer, line);
        Ok(())
    }
}
