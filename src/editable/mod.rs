//! Document text, selections, edit sessions and undo history.
//!
//! # Architecture
//!
//! - [`Buffer`]: rune-addressed text with a line index (backed by `ropey::Rope`)
//! - [`Region`] / [`RegionSet`]: directional cursors/selections and their
//!   sorted, merge-on-insert collection
//! - [`Edit`] / [`Action`] / [`UndoStack`]: primitive edits grouped per
//!   command, held in a position-addressed history with glue groups
//! - [`EditSession`]: the write lock a command holds while it edits
//! - [`movement`]: rune and stop-wise cursor motion
//!
//! # Example
//!
//! ```
//! use rune_edit::editable::Region;
//! use rune_edit::model::Document;
//!
//! let mut doc = Document::new();
//! doc.edit(|e| e.insert(0, "hello")).unwrap();
//! doc.set_regions([Region::cursor(5)]);
//!
//! assert_eq!(doc.text(), "hello");
//! ```

mod buffer;
mod history;
pub mod movement;
mod region;
mod selection;
mod session;

pub use buffer::Buffer;
pub use history::{Action, Edit, UndoStack, DEFAULT_HISTORY_LIMIT};
pub use movement::Stops;
pub use region::Region;
pub use selection::RegionSet;
pub use session::EditSession;
