use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLTokenKind;
use smallvec::SmallVec;
use std::fmt;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// A GraphQL token with its decoded payload and source location.
///
/// Tokens own their text: the `value` is copied out of the source so that
/// tokens (and any AST built from them) never borrow from the input buffer.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct GraphQLToken {
    /// The kind of token (including `LexError` for lexer errors).
    pub kind: GraphQLTokenKind,

    /// The decoded text payload.
    ///
    /// - `Name`, `Int`, `Float`: the exact matched source text
    /// - `String`: the content with escape sequences decoded
    /// - `Comment`: the raw comment text including the leading `#`
    /// - `LexError`: a human-readable error message
    /// - punctuators, `StartOfFile`, `EndOfFile`: empty
    pub value: String,

    /// The source location span of this token.
    ///
    /// For `LexError` tokens the span starts at the point of failure.
    pub span: GraphQLSourceSpan,

    /// Additional context for `LexError` tokens (always empty otherwise).
    pub error_notes: GraphQLErrorNotes,
}

impl GraphQLToken {
    /// Convenience constructor for a token with no error notes.
    pub fn new(
        kind: GraphQLTokenKind,
        value: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
            error_notes: SmallVec::new(),
        }
    }

    /// Creates a `LexError` token carrying `message` and `error_notes`.
    pub fn lex_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        error_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            kind: GraphQLTokenKind::LexError,
            value: message.into(),
            span,
            error_notes,
        }
    }

    /// The synthetic token a token stream starts on, at byte offset 0.
    pub fn start_of_file() -> Self {
        let origin = SourcePosition::default();
        Self::new(
            GraphQLTokenKind::StartOfFile,
            String::new(),
            GraphQLSourceSpan::new(origin, origin),
        )
    }

    /// Byte offset of the token's first character in the source.
    pub fn position(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        self.kind == GraphQLTokenKind::LexError
    }

    /// Parse an `Int` token's raw text to `i64`.
    ///
    /// Returns `None` if this is not an `Int`, or `Some(Err(...))` if the
    /// value does not fit.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self.kind {
            GraphQLTokenKind::Int => Some(self.value.parse()),
            _ => None,
        }
    }

    /// Parse a `Float` token's raw text to `f64`.
    ///
    /// Returns `None` if this is not a `Float`, or `Some(Err(...))` if parsing
    /// fails (possible for lenient literals such as `1.` or `2e`).
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self.kind {
            GraphQLTokenKind::Float => Some(self.value.parse()),
            _ => None,
        }
    }
}

impl fmt::Display for GraphQLToken {
    /// Renders as `Kind("value")`, or just `Kind` for tokens without a
    /// payload.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{:?}", self.kind)
        } else {
            write!(f, "{:?}({:?})", self.kind, self.value)
        }
    }
}
