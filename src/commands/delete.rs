use super::{Args, Command};
use crate::editable::{EditSession, Region};
use crate::error::Result;
use crate::util::previous_tab_stop;

/// Backspace at every cursor.
///
/// A selection is erased as-is. An empty cursor erases one rune to its left,
/// or, with `translate_tabs_to_spaces`, the run of spaces between the cursor
/// and the previous tab stop when there is one. Cursors at offset 0 stay put.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftDelete;

impl Command for LeftDelete {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        let soft_tabs = edit.settings().translate_tabs_to_spaces;
        let tab_size = edit.settings().tab_size;

        edit.for_each_region(|e, region| {
            if !region.is_empty() {
                e.erase_region(region)?;
                return Ok(Region::cursor(region.begin()));
            }

            let cursor = region.head;
            if cursor == 0 {
                return Ok(region);
            }

            let mut start = cursor - 1;
            if soft_tabs {
                let (_, column) = e.buffer().row_col(cursor)?;
                let stop = cursor - (column - previous_tab_stop(column, tab_size));
                let mut begin = cursor;
                while begin > stop && e.buffer().rune_at(begin - 1) == Some(' ') {
                    begin -= 1;
                }
                start = start.min(begin);
            }

            e.erase(start, cursor - start)?;
            Ok(Region::cursor(start))
        })
    }
}

/// Forward delete at every cursor: the selection, or one rune to the right
#[derive(Debug, Clone, Copy, Default)]
pub struct RightDelete;

impl Command for RightDelete {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        edit.for_each_region(|e, region| {
            if region.is_empty() && region.head < e.buffer().len() {
                e.erase(region.head, 1)?;
            } else {
                e.erase_region(region)?;
            }
            Ok(Region::cursor(region.begin()))
        })
    }
}
