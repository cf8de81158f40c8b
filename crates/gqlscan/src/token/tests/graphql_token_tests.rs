//! Tests for `GraphQLToken` construction and payload accessors.

use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use smallvec::smallvec;

fn span(start: usize, end: usize) -> GraphQLSourceSpan {
    GraphQLSourceSpan::new(
        SourcePosition::new(0, start, start, start),
        SourcePosition::new(0, end, end, end),
    )
}

// =============================================================================
// Constructors
// =============================================================================

/// `new()` creates a token without error notes.
#[test]
fn new_creates_token_without_notes() {
    let token = GraphQLToken::new(GraphQLTokenKind::Name, "foo", span(4, 7));

    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert_eq!(token.value, "foo");
    assert_eq!(token.position(), 4);
    assert!(token.error_notes.is_empty());
    assert!(!token.is_error());
}

/// `lex_error()` creates a `LexError` token carrying its message and notes.
#[test]
fn lex_error_carries_message_and_notes() {
    let token = GraphQLToken::lex_error(
        "Unexpected `.`",
        span(2, 3),
        smallvec![GraphQLErrorNote::help("Remove it")],
    );

    assert!(token.is_error());
    assert_eq!(token.value, "Unexpected `.`");
    assert_eq!(token.error_notes.len(), 1);
}

/// The synthetic start token sits at byte offset 0 with an empty payload.
#[test]
fn start_of_file_is_at_origin() {
    let token = GraphQLToken::start_of_file();

    assert_eq!(token.kind, GraphQLTokenKind::StartOfFile);
    assert_eq!(token.position(), 0);
    assert!(token.value.is_empty());
}

// =============================================================================
// Numeric payloads
// =============================================================================

/// Int payloads parse to `i64`; out-of-range values report an error.
#[test]
fn parse_int_value() {
    let token = GraphQLToken::new(GraphQLTokenKind::Int, "-42", span(0, 3));
    assert_eq!(token.parse_int_value(), Some(Ok(-42)));

    let huge = GraphQLToken::new(
        GraphQLTokenKind::Int,
        "99999999999999999999",
        span(0, 20),
    );
    assert!(matches!(huge.parse_int_value(), Some(Err(_))));

    let name = GraphQLToken::new(GraphQLTokenKind::Name, "x", span(0, 1));
    assert_eq!(name.parse_int_value(), None);
}

/// Float payloads parse to `f64`.
#[test]
fn parse_float_value() {
    let token = GraphQLToken::new(GraphQLTokenKind::Float, "1.5e3", span(0, 5));
    assert_eq!(token.parse_float_value(), Some(Ok(1500.0)));

    let int = GraphQLToken::new(GraphQLTokenKind::Int, "1", span(0, 1));
    assert_eq!(int.parse_float_value(), None);
}

// =============================================================================
// Display
// =============================================================================

/// Tokens with a payload render as `Kind("value")`.
#[test]
fn display_includes_payload() {
    let name = GraphQLToken::new(GraphQLTokenKind::Name, "query", span(0, 5));
    assert_eq!(name.to_string(), "Name(\"query\")");

    let brace = GraphQLToken::new(GraphQLTokenKind::BraceLeft, "", span(0, 1));
    assert_eq!(brace.to_string(), "BraceLeft");
}
