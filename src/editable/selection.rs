//! The ordered, merge-on-insert set of regions that makes up a multi-cursor selection.

use super::region::Region;

/// Cursors/selections of a document.
///
/// Regions are kept sorted by `begin()`; no two regions overlap or share a
/// boundary point. Adding a region that touches existing ones replaces them
/// with their union, keeping the direction of the region added last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// A set holding a single cursor
    pub fn cursor(offset: usize) -> Self {
        Self {
            regions: vec![Region::cursor(offset)],
        }
    }

    pub fn add(&mut self, region: Region) {
        // First region whose end reaches the new region's begin
        let start = self
            .regions
            .partition_point(|r| r.end() < region.begin());
        // One past the last region whose begin is within the new region's end
        let stop = start
            + self.regions[start..]
                .iter()
                .take_while(|r| r.begin() <= region.end())
                .count();

        let merged = self.regions[start..stop]
            .iter()
            .fold(region, |acc, r| acc.cover(r));
        self.regions.splice(start..stop, std::iter::once(merged));
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn first(&self) -> Option<Region> {
        self.regions.first().copied()
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut set = RegionSet::new();
        for region in iter {
            set.add(region);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
