use crate::GraphQLLexer;
use crate::GraphQLParserOptions;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Helper to collect all token kinds from a source string.
pub(super) fn token_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    GraphQLLexer::new(source).map(|t| t.kind).collect()
}

/// Helper to collect all tokens from a source string.
pub(super) fn tokens(source: &str) -> Vec<GraphQLToken> {
    GraphQLLexer::new(source).collect()
}

/// Helper to collect all tokens with lenient number literals enabled.
pub(super) fn lenient_tokens(source: &str) -> Vec<GraphQLToken> {
    let options = GraphQLParserOptions {
        strict_number_literals: false,
        ..Default::default()
    };
    GraphQLLexer::with_options(source, &options).collect()
}

/// Helper to lex the first token of a source string.
pub(super) fn first_token(source: &str) -> GraphQLToken {
    GraphQLLexer::new(source).next_token()
}
