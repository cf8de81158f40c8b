use crate::GraphQLSourceSpan;

/// A braced selection set, kept opaque.
///
/// The parser matches the braces (tracking nesting) but does not interpret
/// the fields inside; `span` covers the outer `{` through the matching `}`
/// so callers can recover the text with
/// [`text_in()`](Self::text_in).
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub span: GraphQLSourceSpan,
}

impl SelectionSet {
    /// Returns the source text of this selection set, braces included.
    ///
    /// `source` must be the text the document was parsed from.
    pub fn text_in<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(
            self.span.start_inclusive.byte_offset()..self.span.end_exclusive.byte_offset(),
        )
    }
}
