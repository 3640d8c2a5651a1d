use super::{Args, Command};
use crate::editable::{EditSession, Region, RegionSet};
use crate::error::Result;

/// Select the whole buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl Command for SelectAll {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        let all = Region::new(0, edit.buffer().len());
        edit.set_regions(std::iter::once(all).collect());
        Ok(())
    }
}

/// Drop every region but the first
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSelection;

impl Command for SingleSelection {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        let first = edit.regions().first();
        edit.set_regions(first.into_iter().collect::<RegionSet>());
        Ok(())
    }
}
