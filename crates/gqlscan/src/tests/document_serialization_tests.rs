//! Documents and errors survive a serde round trip through bincode.

use crate::ast;
use crate::tests::utils::parse_ok;
use std::path::Path;

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let bytes = bincode::serde::encode_to_vec(value, bincode::config::standard())
        .expect("value should encode");
    let (decoded, read) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
        .expect("value should decode");
    assert_eq!(read, bytes.len());
    decoded
}

#[test]
fn document_round_trip() {
    let document = parse_ok(
        "query Q($a: [Int!]! = 3, $b: String = \"x\") { a }\n\
         fragment F on T { b }",
    );
    let decoded: ast::Document = round_trip(&document);
    assert_eq!(decoded, document);
}

/// File paths recorded in spans are preserved.
#[test]
fn spans_with_file_paths_round_trip() {
    let lexer = crate::GraphQLLexer::new("{ a }").with_file_path(Path::new("a.graphql"));
    let document = crate::GraphQLParser::from_token_source(lexer)
        .parse_document()
        .expect("document should parse");
    let decoded: ast::Document = round_trip(&document);
    assert_eq!(
        decoded.definitions[0].span().file_path.as_deref(),
        Some(Path::new("a.graphql")),
    );
}
