use serde::Deserialize;

use super::{Args, Command};
use crate::editable::movement::{next_stop, step};
use crate::editable::{EditSession, Region, Stops};
use crate::error::{EditError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum By {
    Characters,
    Stops,
}

#[derive(Debug, Deserialize)]
struct MoveArgs {
    by: By,
    #[serde(default)]
    forward: bool,
    #[serde(default)]
    extend: bool,
    #[serde(default)]
    word_begin: bool,
    #[serde(default)]
    word_end: bool,
    #[serde(default)]
    punct_begin: bool,
    #[serde(default)]
    punct_end: bool,
    #[serde(default)]
    line_begin: bool,
    #[serde(default)]
    line_end: bool,
    #[serde(default)]
    empty_line: bool,
}

impl MoveArgs {
    fn stops(&self) -> Stops {
        Stops {
            word_begin: self.word_begin,
            word_end: self.word_end,
            punct_begin: self.punct_begin,
            punct_end: self.punct_end,
            line_begin: self.line_begin,
            line_end: self.line_end,
            empty_line: self.empty_line,
        }
    }
}

/// Move every cursor's head by one rune or to the next stop.
///
/// Without `extend` each region collapses to its destination; with it the
/// anchor stays and regions that run into each other merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Move;

impl Command for Move {
    fn run(&self, edit: &mut EditSession<'_>, args: &Args) -> Result<()> {
        let args: MoveArgs = args.parse("move")?;
        let stops = args.stops();
        if args.by == By::Stops && stops.is_empty() {
            return Err(EditError::invalid_args(
                "move",
                "by=stops needs at least one stop class",
            ));
        }

        edit.for_each_region(|e, region| {
            let buffer = e.buffer();
            let dest = match args.by {
                By::Characters => step(buffer, region.head, args.forward),
                By::Stops => next_stop(buffer, region.head, args.forward, stops),
            };
            Ok(if args.extend {
                region.extend_to(dest)
            } else {
                Region::cursor(dest)
            })
        })
    }
}
