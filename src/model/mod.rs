//! Editor model - documents and the editor that runs commands on them

pub mod document;
pub mod editor;

pub use document::Document;
pub use editor::Editor;
