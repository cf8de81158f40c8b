//! Tests for fragment definitions.

use crate::GraphQLParseErrorKind;
use crate::ast;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::token::GraphQLTokenKind;

/// <https://spec.graphql.org/October2021/#FragmentDefinition>
#[test]
fn fragment_definition() {
    let source = "fragment UserFields on User { id name { first } }";
    let document = parse_ok(source);
    let fragment = document.fragments().next();

    assert_eq!(fragment.map(|f| f.name.as_str()), Some("UserFields"));
    assert_eq!(fragment.map(|f| f.type_condition.as_str()), Some("User"));
    assert_eq!(
        fragment.and_then(|f| f.selection_set.text_in(source)),
        Some("{ id name { first } }"),
    );
    assert_eq!(fragment.map(|f| f.span.byte_len()), Some(source.len()));
}

/// Fragments and operations mix freely.
#[test]
fn fragment_between_operations() {
    let document = parse_ok("{ a } fragment F on T { b } query { c }");
    assert!(matches!(document.definitions[1], ast::Definition::Fragment(_)));
    assert_eq!(document.operations().count(), 2);
}

/// A fragment cannot be named `on`.
#[test]
fn fragment_named_on() {
    let error = parse_err("fragment on on User { id }");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::ReservedName {
            name: "on".to_string(),
        },
    );
    assert_eq!(error.position(), 9);
}

/// The type condition keyword is required.
#[test]
fn missing_type_condition() {
    let error = parse_err("fragment F User { id }");
    assert_eq!(error.message(), "Expected `on`, found name `User`");
    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnexpectedToken {
            found: GraphQLTokenKind::Name,
            ..
        },
    ));
}

/// Directives on fragments are outside the supported grammar.
#[test]
fn fragment_directives_are_rejected() {
    let error = parse_err("fragment F on User @skip(if: true) { id }");
    assert_eq!(error.message(), "Expected `{`, found `@`");
}
