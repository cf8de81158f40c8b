use crate::token::GraphQLTokenKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query Q($id Int) { x }
    ///             ^^^ expected `:`, found name
    /// ```
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// The token kinds the grammar allowed here.
        expected: Vec<GraphQLTokenKind>,
        /// The kind of the token actually found.
        found: GraphQLTokenKind,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// query Q($id:
    ///             ^ expected name, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the end of input was reached.
        expected: Vec<GraphQLTokenKind>,
    },

    /// The parser reached a `LexError` token.
    ///
    /// The lexer's message and notes are preserved in the parent
    /// `GraphQLParseError`'s `message` and `notes` fields.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `(` or `[` was never closed before the end of input.
    ///
    /// The opening location is included in the error's notes.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g., `"{"`).
        delimiter: String,
    },

    /// A construct that requires at least one item was empty.
    ///
    /// # Example
    /// ```text
    /// query Q() { x }
    ///         ^^ variable definitions cannot be empty
    /// ```
    #[error("invalid empty construct: {construct}")]
    InvalidEmptyConstruct {
        /// What was empty (e.g., `"variable definitions"`).
        construct: String,
    },

    /// A non-null marker was applied to a type that is already non-null
    /// (`Int!!`).
    #[error("redundant non-null marker")]
    RedundantNonNull,

    /// A reserved name was used where it is not allowed.
    ///
    /// `on` cannot be a fragment name because it introduces type conditions.
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used.
        name: String,
    },

    /// Type references were nested deeper than the configured limit.
    #[error("nesting too deep (limit {limit})")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}
