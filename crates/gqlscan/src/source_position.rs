/// A location in GraphQL source text, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. The lexer is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: Unicode scalar values since the start of the line
/// - `col_utf16`: UTF-16 code units since the start of the line
/// - `byte_offset`: byte offset within the whole document
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane (e.g. emoji) advance `col_utf8` by 1 and `col_utf16`
/// by 2.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition from 0-based components.
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based count of Unicode scalar values within the current
    /// line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// Prefer this for LSP integrations.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
