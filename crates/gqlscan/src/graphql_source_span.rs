use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width span at `pos`, keeping this span's file path.
    pub fn empty_at(&self, pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos,
            end_exclusive: pos,
            file_path: self.file_path.clone(),
        }
    }

    /// Creates a span running from the start of `self` to the end of `end`.
    pub fn to(&self, end: &GraphQLSourceSpan) -> Self {
        Self {
            start_inclusive: self.start_inclusive,
            end_exclusive: end.end_exclusive,
            file_path: self.file_path.clone(),
        }
    }

    /// Length of the span in bytes.
    pub fn byte_len(&self) -> usize {
        self.end_exclusive
            .byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }
}
