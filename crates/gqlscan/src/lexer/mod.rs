//! The lexer: turns GraphQL source text into [`GraphQLToken`]s.
//!
//! [`GraphQLToken`]: crate::token::GraphQLToken

mod graphql_lexer;

pub use graphql_lexer::GraphQLLexer;

#[cfg(test)]
mod tests;
