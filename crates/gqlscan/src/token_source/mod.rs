//! The token source abstraction consumed by
//! [`GraphQLTokenStream`](crate::GraphQLTokenStream).

use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] producers (iterators that generate
/// [`GraphQLToken`]).
///
/// [`GraphQLLexer`](crate::GraphQLLexer) is the source used for text input,
/// but any iterator of tokens works; tests feed hand-built token vectors
/// through the same parser.
///
/// Sources are responsible for:
/// - Skipping ignored tokens (whitespace, commas, comments)
/// - Emitting [`GraphQLTokenKind::LexError`](crate::token::GraphQLTokenKind::LexError)
///   tokens for malformed input instead of failing
/// - Ending with a [`GraphQLTokenKind::EndOfFile`](crate::token::GraphQLTokenKind::EndOfFile)
///   token
///
/// A source that ends without an `EndOfFile` token is tolerated: the stream
/// synthesizes one.
pub trait GraphQLTokenSource: Iterator<Item = GraphQLToken> {}

impl<T> GraphQLTokenSource for T where T: Iterator<Item = GraphQLToken> {}
