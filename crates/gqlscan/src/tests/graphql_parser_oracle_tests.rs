//! Cross-checks parse results against the `graphql-parser` crate for
//! documents inside the supported grammar.

use crate::ast;
use crate::tests::utils::parse_ok;
use graphql_parser::query as gp;

/// A comparable summary of one definition: kind, name and variables as
/// `(name, type)` pairs.
#[derive(Debug, PartialEq)]
struct DefinitionSummary {
    kind: String,
    name: Option<String>,
    variables: Vec<(String, String)>,
}

fn render_oracle_type(type_: &gp::Type<'_, String>) -> String {
    match type_ {
        gp::Type::NamedType(name) => name.clone(),
        gp::Type::ListType(inner) => format!("[{}]", render_oracle_type(inner)),
        gp::Type::NonNullType(inner) => format!("{}!", render_oracle_type(inner)),
    }
}

fn oracle_variables(
    variables: &[gp::VariableDefinition<'_, String>],
) -> Vec<(String, String)> {
    variables
        .iter()
        .map(|v| (v.name.clone(), render_oracle_type(&v.var_type)))
        .collect()
}

fn oracle_summary(source: &str) -> Vec<DefinitionSummary> {
    let document = match gp::parse_query::<String>(source) {
        Ok(document) => document,
        Err(error) => panic!("graphql-parser rejected {source:?}: {error}"),
    };

    document
        .definitions
        .iter()
        .map(|definition| match definition {
            gp::Definition::Operation(gp::OperationDefinition::SelectionSet(_)) => {
                DefinitionSummary {
                    kind: "query".to_string(),
                    name: None,
                    variables: Vec::new(),
                }
            },
            gp::Definition::Operation(gp::OperationDefinition::Query(query)) => {
                DefinitionSummary {
                    kind: "query".to_string(),
                    name: query.name.clone(),
                    variables: oracle_variables(&query.variable_definitions),
                }
            },
            gp::Definition::Operation(gp::OperationDefinition::Mutation(mutation)) => {
                DefinitionSummary {
                    kind: "mutation".to_string(),
                    name: mutation.name.clone(),
                    variables: oracle_variables(&mutation.variable_definitions),
                }
            },
            gp::Definition::Operation(gp::OperationDefinition::Subscription(sub)) => {
                DefinitionSummary {
                    kind: "subscription".to_string(),
                    name: sub.name.clone(),
                    variables: oracle_variables(&sub.variable_definitions),
                }
            },
            gp::Definition::Fragment(fragment) => DefinitionSummary {
                kind: "fragment".to_string(),
                name: Some(fragment.name.clone()),
                variables: Vec::new(),
            },
        })
        .collect()
}

fn our_summary(source: &str) -> Vec<DefinitionSummary> {
    parse_ok(source)
        .definitions
        .iter()
        .map(|definition| match definition {
            ast::Definition::Operation(operation) => DefinitionSummary {
                kind: operation.kind.to_string(),
                name: operation.name.as_ref().map(|n| n.value.clone()),
                variables: operation
                    .variable_definitions
                    .iter()
                    .map(|v| (v.name.value.clone(), v.type_reference.to_string()))
                    .collect(),
            },
            ast::Definition::Fragment(fragment) => DefinitionSummary {
                kind: "fragment".to_string(),
                name: Some(fragment.name.value.clone()),
                variables: Vec::new(),
            },
        })
        .collect()
}

const DOCUMENTS: &[&str] = &[
    "{ hero { name } }",
    "query HeroNameAndFriends($episode: Episode = JEDI) {\n  hero(episode: $episode) {\n    name\n    friends { name }\n  }\n}",
    "mutation CreateReview($ep: Episode!, $review: ReviewInput!) {\n  createReview(episode: $ep, review: $review) { stars }\n}",
    "subscription OnComment($repo: String!, $limit: Int = 10) { commentAdded(repo: $repo) { id } }",
    "query Matrix($rows: [[Float!]!]!, $labels: [String], $seed: Int = -3) { matrix }",
    "fragment comparisonFields on Character { name appearsIn friends { name } }\nquery { leftComparison: hero(episode: EMPIRE) { ...comparisonFields } }",
    "# comment\nquery Commas($a: Int,,, $b: Float = 1.5e3,) { a, b, }",
    "query Strings($s: String = \"caf\\u00e9 \\\"quoted\\\"\") { s }",
];

/// Operation kinds, names and variable types agree with graphql-parser.
#[test]
fn summaries_agree_with_graphql_parser() {
    for source in DOCUMENTS {
        assert_eq!(our_summary(source), oracle_summary(source), "source: {source}");
    }
}

/// Default string values decode the same way graphql-parser does.
#[test]
fn string_default_decoding_agrees() {
    let source = DOCUMENTS[DOCUMENTS.len() - 1];

    let ours = parse_ok(source)
        .operations()
        .next()
        .and_then(|op| op.variable_definitions[0].default_value.clone())
        .map(|token| token.value);

    let oracle = match gp::parse_query::<String>(source) {
        Ok(document) => match &document.definitions[0] {
            gp::Definition::Operation(gp::OperationDefinition::Query(query)) => {
                match &query.variable_definitions[0].default_value {
                    Some(gp::Value::String(value)) => Some(value.clone()),
                    other => panic!("unexpected default {other:?}"),
                }
            },
            other => panic!("unexpected definition {other:?}"),
        },
        Err(error) => panic!("graphql-parser rejected {source:?}: {error}"),
    };

    assert_eq!(ours, oracle);
}
