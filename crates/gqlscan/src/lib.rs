//! A GraphQL lexer and recursive-descent parser for executable documents.
//!
//! The crate turns GraphQL source text into a [`Document`](ast::Document)
//! of operations (with their variable definitions and type references) and
//! fragment definitions. Selection sets are matched brace-for-brace but kept
//! opaque.
//!
//! ```rust
//! use gqlscan::ast::TypeReference;
//!
//! let document = gqlscan::parse("query Foo($x: [Int!]! = 5) { foo }").unwrap();
//! let operation = document.operations().next().unwrap();
//! let variable = &operation.variable_definitions[0];
//! assert_eq!(variable.name.value, "x");
//! assert_eq!(variable.type_reference.to_string(), "[Int!]!");
//! assert!(matches!(variable.type_reference, TypeReference::NonNull(_)));
//! ```
//!
//! Errors carry a span and can be rendered for humans:
//!
//! ```rust
//! let source = "query Foo($x Int) { foo }";
//! let error = gqlscan::parse(source).unwrap_err();
//! assert_eq!(error.position(), 13);
//! println!("{}", error.format_detailed(Some(source)));
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_token_stream;
mod lexer;
mod parser_options;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_token_stream::GraphQLTokenStream;
pub use lexer::GraphQLLexer;
pub use parser_options::GraphQLParserOptions;
pub use source_position::SourcePosition;

/// Parses `source` into a [`Document`](ast::Document) with default options.
pub fn parse(source: &str) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses `source` into a [`Document`](ast::Document) using `options`.
pub fn parse_with_options(
    source: &str,
    options: &GraphQLParserOptions,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::with_options(source, options).parse_document()
}

#[cfg(test)]
mod tests;
