//! The rendering frontend as seen from the editing engine.
//!
//! The engine never draws anything. Viewport commands ask the frontend which
//! part of the document is visible and tell it which region to bring into view.

use crate::editable::{Buffer, Region};

pub trait Frontend {
    /// Bring `region` of the document held in `buffer` into view
    fn show(&self, buffer: &Buffer, region: Region);

    /// The currently visible part of the document
    fn visible_region(&self, buffer: &Buffer) -> Region;
}

/// Frontend that displays nothing and reports the whole buffer as visible
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyFrontend;

impl Frontend for DummyFrontend {
    fn show(&self, _buffer: &Buffer, region: Region) {
        tracing::trace!("show {}", region);
    }

    fn visible_region(&self, buffer: &Buffer) -> Region {
        Region::new(0, buffer.len())
    }
}
