//! Character classification and tab-stop arithmetic shared by editing commands

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character class used to find word stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters, line breaks included
    Whitespace,
    /// Alphanumeric characters and `_` (anything not otherwise classified)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Number of spaces a soft tab inserts at `column` so the cursor lands on the
/// next tab stop.
pub fn soft_tab_width(column: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    tab_size - column % tab_size
}

/// Column of the tab stop strictly before `column` (0 stays 0).
pub fn previous_tab_stop(column: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    column.saturating_sub(1) / tab_size * tab_size
}
