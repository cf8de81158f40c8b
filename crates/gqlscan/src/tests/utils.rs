use crate::GraphQLParseError;
use crate::ast;

/// Parses `source`, panicking with the rendered diagnostic on failure.
pub(super) fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!(
            "expected {source:?} to parse:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it succeeds.
pub(super) fn parse_err(source: &str) -> GraphQLParseError {
    match crate::parse(source) {
        Ok(document) => panic!("expected {source:?} to fail, got {document:?}"),
        Err(error) => error,
    }
}

/// Parses `source` and returns its only definition, which must be an
/// operation.
pub(super) fn only_operation(source: &str) -> ast::OperationDefinition {
    let mut document = parse_ok(source);
    assert_eq!(document.definitions.len(), 1, "source: {source:?}");
    match document.definitions.remove(0) {
        ast::Definition::Operation(operation) => operation,
        other => panic!("expected an operation, got {other:?}"),
    }
}
