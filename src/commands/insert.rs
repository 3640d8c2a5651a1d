use std::borrow::Cow;

use serde::Deserialize;

use super::{Args, Command};
use crate::editable::{EditSession, Region};
use crate::error::Result;
use crate::util::soft_tab_width;

#[derive(Debug, Deserialize)]
struct InsertArgs {
    characters: String,
}

/// Insert `characters` at every cursor, replacing selected text.
///
/// With `translate_tabs_to_spaces`, a lone tab becomes the spaces needed to
/// reach the next tab stop from each cursor's own column.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl Command for Insert {
    fn run(&self, edit: &mut EditSession<'_>, args: &Args) -> Result<()> {
        let InsertArgs { characters } = args.parse("insert")?;
        let soft_tab = characters == "\t" && edit.settings().translate_tabs_to_spaces;
        let tab_size = edit.settings().tab_size;

        edit.for_each_region(|e, region| {
            e.erase_region(region)?;
            let at = region.begin();
            let text: Cow<'_, str> = if soft_tab {
                let (_, column) = e.buffer().row_col(at)?;
                Cow::Owned(" ".repeat(soft_tab_width(column, tab_size)))
            } else {
                Cow::Borrowed(characters.as_str())
            };
            e.insert(at, &text)?;
            Ok(Region::cursor(at + text.chars().count()))
        })
    }
}
