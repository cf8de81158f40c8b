//! Property tests: the lexer terminates on any input and round-trips
//! well-formed numbers.

use crate::GraphQLLexer;
use crate::token::GraphQLTokenKind;
use proptest::prelude::*;

proptest! {
    /// Every token consumes at least one character, so arbitrary input
    /// yields a bounded number of tokens ending in `EndOfFile`.
    #[test]
    fn lexing_terminates_on_arbitrary_input(source in any::<String>()) {
        let tokens: Vec<_> = GraphQLLexer::new(&source).collect();

        prop_assert!(tokens.len() <= source.chars().count() + 1);
        prop_assert_eq!(
            tokens.last().map(|t| t.kind),
            Some(GraphQLTokenKind::EndOfFile),
        );
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == GraphQLTokenKind::EndOfFile).count(),
            1,
        );
    }

    /// Token positions never decrease and never pass the end of the source.
    #[test]
    fn positions_are_monotonic(source in "[ -~\t\n\r]{0,64}") {
        let mut last = 0;
        for token in GraphQLLexer::new(&source) {
            prop_assert!(token.position() >= last);
            prop_assert!(token.position() <= source.len());
            last = token.position();
        }
    }

    /// A well-formed integer lexes to exactly one `Int` with the same text.
    #[test]
    fn integers_round_trip(source in "-?(0|[1-9][0-9]{0,15})") {
        let tokens: Vec<_> = GraphQLLexer::new(&source).collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, GraphQLTokenKind::Int);
        prop_assert_eq!(&tokens[0].value, &source);
    }

    /// A well-formed float lexes to exactly one `Float` with the same text.
    #[test]
    fn floats_round_trip(
        source in "-?(0|[1-9][0-9]{0,5})(\\.[0-9]{1,5}([eE][+-]?[0-9]{1,3})?|[eE][+-]?[0-9]{1,3})",
    ) {
        let tokens: Vec<_> = GraphQLLexer::new(&source).collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, GraphQLTokenKind::Float);
        prop_assert_eq!(&tokens[0].value, &source);
    }
}
