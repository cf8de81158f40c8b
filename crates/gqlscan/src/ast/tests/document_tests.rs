use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ast;

fn span(start: usize, end: usize) -> GraphQLSourceSpan {
    GraphQLSourceSpan::new(
        SourcePosition::new(0, start, start, start),
        SourcePosition::new(0, end, end, end),
    )
}

fn name(value: &str, start: usize) -> ast::Name {
    ast::Name {
        value: value.to_string(),
        span: span(start, start + value.len()),
    }
}

/// `operations()` and `fragments()` split definitions by variant, keeping
/// source order.
#[test]
fn operations_and_fragments() {
    let fragment = ast::FragmentDefinition {
        name: name("F", 9),
        type_condition: name("T", 14),
        selection_set: ast::SelectionSet { span: span(16, 21) },
        span: span(0, 21),
    };
    let operation = ast::OperationDefinition {
        kind: ast::OperationKind::Mutation,
        name: Some(name("M", 31)),
        variable_definitions: Vec::new(),
        selection_set: ast::SelectionSet { span: span(33, 38) },
        span: span(22, 38),
    };
    let document = ast::Document {
        definitions: vec![
            ast::Definition::Fragment(fragment),
            ast::Definition::Operation(operation),
        ],
    };

    let operation_names: Vec<_> = document
        .operations()
        .filter_map(|op| op.name.as_ref().map(|n| n.as_str()))
        .collect();
    assert_eq!(operation_names, vec!["M"]);

    let fragment_names: Vec<_> = document.fragments().map(|f| f.name.as_str()).collect();
    assert_eq!(fragment_names, vec!["F"]);

    assert_eq!(document.definitions[1].span().start_inclusive.byte_offset(), 22);
}

/// `text_in()` slices the selection set's braces out of the source.
#[test]
fn selection_set_text() {
    let source = "query { a { b } }";
    let selection_set = ast::SelectionSet { span: span(6, 17) };
    assert_eq!(selection_set.text_in(source), Some("{ a { b } }"));
    assert_eq!(selection_set.text_in("short"), None);
}
