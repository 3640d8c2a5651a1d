//! Utility modules

pub mod text;

pub use text::{char_type, is_punctuation, previous_tab_stop, soft_tab_width, CharType};
