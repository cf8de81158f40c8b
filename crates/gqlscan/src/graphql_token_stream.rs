//! A one-token lookahead cursor over a [`GraphQLTokenSource`].

use crate::GraphQLSourceSpan;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// An explicit cursor over a [`GraphQLTokenSource`].
///
/// The stream owns the single "current" token. It starts positioned on a
/// synthetic `StartOfFile` token at byte 0, so the first
/// [`advance()`](Self::advance) moves onto the first real token.
///
/// Once the source is exhausted the stream keeps answering `EndOfFile`,
/// positioned at the end of the last token seen.
///
/// # Type Parameters
///
/// * `TTokenSource` - The underlying token source, which must implement
///   [`GraphQLTokenSource`] (i.e., `Iterator<Item = GraphQLToken>`).
pub struct GraphQLTokenStream<TTokenSource: GraphQLTokenSource> {
    token_source: TTokenSource,
    current: GraphQLToken,
}

impl<TTokenSource: GraphQLTokenSource> GraphQLTokenStream<TTokenSource> {
    /// Creates a new token stream positioned on `StartOfFile`.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            current: GraphQLToken::start_of_file(),
        }
    }

    /// Moves to the next token and returns the token moved past.
    pub fn advance(&mut self) -> GraphQLToken {
        let next = match self.token_source.next() {
            Some(token) => token,
            None => self.synthesize_end_of_file(),
        };
        std::mem::replace(&mut self.current, next)
    }

    /// Check if the cursor has reached the end of the stream.
    pub fn is_at_end(&self) -> bool {
        self.current.kind == GraphQLTokenKind::EndOfFile
    }

    /// The current token.
    pub fn peek(&self) -> &GraphQLToken {
        &self.current
    }

    /// The kind of the current token.
    pub fn peek_kind(&self) -> GraphQLTokenKind {
        self.current.kind
    }

    fn synthesize_end_of_file(&self) -> GraphQLToken {
        let end = self.current.span.end_exclusive;
        GraphQLToken::new(
            GraphQLTokenKind::EndOfFile,
            String::new(),
            GraphQLSourceSpan {
                start_inclusive: end,
                end_exclusive: end,
                file_path: self.current.span.file_path.clone(),
            },
        )
    }
}
